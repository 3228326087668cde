mod hdl_add_member;
pub use hdl_add_member::add_family_member;

mod hdl_delete_member;
pub use hdl_delete_member::delete_family_member;

mod hdl_edit_member;
pub use hdl_edit_member::edit_family_member;

mod hdl_login;
pub use hdl_login::admin_login;

mod hdl_panel;
pub use hdl_panel::admin_panel;

mod hdl_run_secret_santa;
pub use hdl_run_secret_santa::run_secret_santa;

mod hdl_set_deadline;
pub use hdl_set_deadline::set_deadline;

use serde::Deserialize;

use crate::familywish_errors::FWErr;
use crate::utils::data_validation::member_name::{member_name_normalize, member_name_validate};
use crate::utils::data_validation::team_name::{team_name_normalize, team_name_validate};

#[derive(Debug, Deserialize)]
pub struct MemberRequest {
    pub name: String,
    #[serde(default)]
    pub team_name: Option<String>,
}

impl MemberRequest {
    /// Trimmed and validated name and team.
    fn normalized(&self) -> Result<(String, Option<String>), FWErr> {
        let name = member_name_normalize(&self.name);
        member_name_validate(&name)?;
        let team_name = team_name_normalize(self.team_name.as_deref());
        team_name_validate(team_name.as_deref())?;
        Ok((name, team_name))
    }
}
