use crate::familywish_errors::FWErr;

#[derive(Debug, Clone)]
pub enum MemberNameErr {
    MemberNameEmpty,
    MemberNameTooLongMoreThanSixtyFourChars,
    MemberNameContainsControlChars,
}

pub fn member_name_normalize(name: &str) -> String {
    name.trim().to_string()
}

pub fn member_name_validate(name: &str) -> Result<(), FWErr> {
    if name.is_empty() {
        return Err(FWErr::ValidationMemberNameError(MemberNameErr::MemberNameEmpty));
    }

    if name.chars().count() > 64 {
        return Err(FWErr::ValidationMemberNameError(
            MemberNameErr::MemberNameTooLongMoreThanSixtyFourChars,
        ));
    }

    if name.chars().any(char::is_control) {
        return Err(FWErr::ValidationMemberNameError(
            MemberNameErr::MemberNameContainsControlChars,
        ));
    }

    Ok(())
}
