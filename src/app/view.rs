// SPDX-License-Identifier: MPL-2.0
//! Top-level view: the browser fills the window.

use super::{App, Message};
use iced::Element;

pub fn view(app: &App) -> Element<'_, Message> {
    app.browser.view().map(Message::Browser)
}
