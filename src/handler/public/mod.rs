mod hdl_add_wish;
pub use hdl_add_wish::add_wish;

mod hdl_delete_wish;
pub use hdl_delete_wish::delete_wish;

mod hdl_list_members;
pub use hdl_list_members::list_members;

mod hdl_my_wishlist;
pub use hdl_my_wishlist::my_wishlist;

mod hdl_reserve_wish;
pub use hdl_reserve_wish::reserve_wish;

mod hdl_who_are_you;
pub use hdl_who_are_you::who_are_you;
