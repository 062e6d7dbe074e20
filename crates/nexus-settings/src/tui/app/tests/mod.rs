pub(crate) use super::*;
pub(crate) use crate::tui::test_utils::{
    find_row_with_text, make_app, make_app_with, make_app_with_key, photo, render_app_to_buffer,
};
