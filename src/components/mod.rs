pub mod author_details_page;
pub mod authors_page;
pub mod editable_cell;
pub mod game_details_page;
pub mod game_form;
pub mod games_list;
pub mod games_page;
pub mod platform_editor;
pub mod rating_stars;
pub mod reviews_list;
pub mod search_bar;
