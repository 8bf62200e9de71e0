pub mod end_session;
pub mod get_session;
pub mod navigate;
pub mod record_answer;
pub mod screen_session_images;
pub mod start_session;
pub mod submit_session;
