use crate::familywish_errors::FWErr;

#[derive(Debug, Clone)]
pub enum ProductLinkErr {
    ProductLinkNotHttp,
    ProductLinkTooLongMoreThanTwoThousandFortyEightChars,
    ProductLinkContainsWhitespace,
}

pub fn product_link_normalize(link: Option<&str>) -> Option<String> {
    link.map(str::trim)
        .filter(|link| !link.is_empty())
        .map(str::to_string)
}

pub fn product_link_validate(link: Option<&str>) -> Result<(), FWErr> {
    let Some(link) = link else {
        return Ok(());
    };

    let lowercase_link = link.to_lowercase();
    if !lowercase_link.starts_with("http://") && !lowercase_link.starts_with("https://") {
        return Err(FWErr::ValidationProductLinkError(
            ProductLinkErr::ProductLinkNotHttp,
        ));
    }

    if link.len() > 2048 {
        return Err(FWErr::ValidationProductLinkError(
            ProductLinkErr::ProductLinkTooLongMoreThanTwoThousandFortyEightChars,
        ));
    }

    if link.chars().any(char::is_whitespace) {
        return Err(FWErr::ValidationProductLinkError(
            ProductLinkErr::ProductLinkContainsWhitespace,
        ));
    }

    Ok(())
}
