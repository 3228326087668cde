use crate::familywish_errors::FWErr;

#[derive(Debug, Clone)]
pub enum TeamNameErr {
    TeamNameTooLongMoreThanSixtyFourChars,
    TeamNameContainsControlChars,
}

// Blank team means "no team"
pub fn team_name_normalize(team_name: Option<&str>) -> Option<String> {
    team_name
        .map(str::trim)
        .filter(|team| !team.is_empty())
        .map(str::to_string)
}

pub fn team_name_validate(team_name: Option<&str>) -> Result<(), FWErr> {
    let Some(team_name) = team_name else {
        return Ok(());
    };

    if team_name.chars().count() > 64 {
        return Err(FWErr::ValidationTeamNameError(
            TeamNameErr::TeamNameTooLongMoreThanSixtyFourChars,
        ));
    }

    if team_name.chars().any(char::is_control) {
        return Err(FWErr::ValidationTeamNameError(
            TeamNameErr::TeamNameContainsControlChars,
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_team_becomes_none() {
        assert_eq!(team_name_normalize(Some("  ")), None);
        assert_eq!(team_name_normalize(None), None);
        assert_eq!(team_name_normalize(Some(" Müllers ")), Some("Müllers".to_string()));
    }

    #[test]
    fn long_team_is_rejected() {
        assert!(team_name_validate(Some(&"t".repeat(65))).is_err());
        assert!(team_name_validate(None).is_ok());
    }
}
