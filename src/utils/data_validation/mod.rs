pub mod deadline;
pub mod member_name;
pub mod product_link;
pub mod team_name;
pub mod wish_text;
