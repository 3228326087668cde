use crate::familywish_errors::FWErr;

#[derive(Debug, Clone)]
pub enum WishTextErr {
    WishTextEmpty,
    WishTextTooLongMoreThanTwoThousandChars,
}

pub fn wish_text_validate(wish_text: &str) -> Result<(), FWErr> {
    if wish_text.trim().is_empty() {
        return Err(FWErr::ValidationWishTextError(WishTextErr::WishTextEmpty));
    }

    // Newlines are fine, the text is shown as a multi-line note
    if wish_text.chars().count() > 2000 {
        return Err(FWErr::ValidationWishTextError(
            WishTextErr::WishTextTooLongMoreThanTwoThousandChars,
        ));
    }

    Ok(())
}
