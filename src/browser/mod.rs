// SPDX-License-Identifier: MPL-2.0
//! The photo browser: a paging container that sequences preview pages,
//! owns the header/toolbar chrome, and reports dismissal and long-press
//! gestures to the embedding application.
//!
//! The component is written in the Elm style: `handle_message` mutates
//! state and returns a single [`Effect`] for the application to perform
//! (image loads, window-mode changes, delegate dispatch). The swipe
//! mechanics themselves come from the host: a swipe begins a transition
//! against a freshly constructed neighbor page and either completes
//! (committing `current_index`) or cancels (discarding the staged page).

pub mod delegate;
pub mod fade;
pub mod page;

pub use delegate::BrowserDelegate;
pub use fade::{Fade, FADE_DURATION};
pub use page::{LongPress, PreviewPage};

use crate::error::Error;
use crate::media::ImageData;
use crate::photo::Photo;
use crate::ui::design_tokens::{layout, palette};
use crate::ui::{header, share, toolbar};
use iced::widget::{container, Stack};
use iced::{Color, Element, Length, Point, Rectangle, Size};
use std::path::PathBuf;
use std::time::Instant;

/// Horizontal pointer travel that begins a page transition.
const SWIPE_BEGIN_THRESHOLD: f32 = 24.0;

/// Horizontal pointer travel that commits an in-flight transition on
/// release; anything less cancels it.
const SWIPE_COMMIT_THRESHOLD: f32 = 80.0;

/// Direction of a page transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward the next (higher-index) photo.
    Forward,
    /// Toward the previous photo.
    Backward,
}

/// An in-flight page transition holding the staged neighbor page.
#[derive(Debug, Clone)]
struct Transition {
    direction: Direction,
    staged: PreviewPage,
}

#[derive(Debug, Clone)]
struct Drag {
    origin: Point,
    latest: Point,
}

impl Drag {
    fn travel_x(&self) -> f32 {
        self.latest.x - self.origin.x
    }
}

/// Messages consumed by the browser component.
#[derive(Debug, Clone)]
pub enum Message {
    /// The browser became visible for the first time.
    Shown,
    /// The host began a swipe in the given direction.
    SwipeStarted(Direction),
    /// The host finished a swipe; `completed` is false for a cancelled one.
    SwipeFinished { completed: bool },
    /// Keyboard-style navigation: begin and complete in one step.
    Navigate(Direction),
    /// The image load for the page at `index` finished.
    PageImageLoaded {
        index: usize,
        result: Result<ImageData, Error>,
    },
    Page(page::Message),
    Header(header::Message),
    Toolbar(toolbar::Message),
    Share(share::Message),
    SetFullScreen(bool),
    ToggleFullScreen,
    /// The window was resized; refreshes the derived idiom.
    Resized(Size),
    /// Periodic tick while a press is held or the chrome fade is running.
    Tick,
}

/// Side effects the application should perform after a message.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Decode the image for the page at `index` off the UI thread.
    LoadImage { index: usize, path: PathBuf },
    /// The dismiss button was tapped; consult the delegate, then fall back
    /// to default dismissal.
    DismissRequested,
    /// A long press landed on the displayed image.
    LongPress(LongPress),
    /// Full-screen mode changed; the window mode should follow.
    FullScreenChanged(bool),
    /// The share surface requested saving a copy of the current image.
    SaveImageCopy {
        source: PathBuf,
        suggested_name: String,
    },
    /// A caller-supplied toolbar item was activated.
    ToolbarItemActivated(usize),
}

/// Complete browser component state.
pub struct State {
    photos: Vec<Photo>,
    current_index: usize,
    current_page: Option<PreviewPage>,
    transition: Option<Transition>,
    header: Option<header::State>,
    toolbar_items: Vec<toolbar::ToolbarItem>,
    toolbar_gap: f32,
    share: Option<share::State>,
    is_full_screen: bool,
    chrome: Fade,
    background: Color,
    idiom_override: Option<toolbar::Idiom>,
    window_size: Size,
    drag: Option<Drag>,
    displayed: bool,
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl State {
    /// Creates an empty browser; photos are assigned before presentation.
    #[must_use]
    pub fn new() -> Self {
        Self {
            photos: Vec::new(),
            current_index: 0,
            current_page: None,
            transition: None,
            header: None,
            toolbar_items: Vec::new(),
            toolbar_gap: layout::TABLET_ITEM_GAP,
            share: None,
            is_full_screen: false,
            chrome: Fade::opaque(),
            background: palette::BLACK,
            idiom_override: None,
            window_size: Size::new(0.0, 0.0),
            drag: None,
            displayed: false,
        }
    }

    /// Supplies the photo sequence. Only honored before first display;
    /// later calls are silent no-ops and return `false`.
    pub fn set_photos(&mut self, photos: Vec<Photo>) -> bool {
        if self.displayed {
            return false;
        }
        self.photos = photos;
        true
    }

    /// Supplies the toolbar action items.
    pub fn set_toolbar_items(&mut self, items: Vec<toolbar::ToolbarItem>) {
        self.toolbar_items = items;
    }

    /// Overrides the gap between toolbar items in the tablet layout.
    pub fn set_toolbar_gap(&mut self, gap: f32) {
        self.toolbar_gap = gap;
    }

    /// Sets the browser background used outside full-screen mode.
    pub fn set_background(&mut self, color: Color) {
        self.background = color;
    }

    /// Forces a device idiom instead of deriving it from window width.
    pub fn set_idiom_override(&mut self, idiom: Option<toolbar::Idiom>) {
        self.idiom_override = idiom;
    }

    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The photo at `current_index`, if photos are set.
    pub fn current_photo(&self) -> Option<&Photo> {
        self.photos.get(self.current_index)
    }

    /// The decoded image of the displayed page, if loaded.
    pub fn current_image(&self) -> Option<&ImageData> {
        self.current_page.as_ref().and_then(PreviewPage::image)
    }

    pub fn is_full_screen(&self) -> bool {
        self.is_full_screen
    }

    /// Header state; `None` until first display with non-empty photos.
    pub fn header(&self) -> Option<&header::State> {
        self.header.as_ref()
    }

    /// Whether the toolbar has been installed: displayed with items.
    pub fn toolbar_active(&self) -> bool {
        self.displayed && !self.toolbar_items.is_empty()
    }

    /// Whether the share surface is open.
    pub fn share_open(&self) -> bool {
        self.share.is_some()
    }

    /// The effective idiom: the override when set, else derived from the
    /// window width.
    pub fn idiom(&self) -> toolbar::Idiom {
        self.idiom_override
            .unwrap_or_else(|| toolbar::Idiom::from_width(self.window_size.width))
    }

    /// Chrome opacity at `now`.
    pub fn chrome_opacity(&self, now: Instant) -> f32 {
        self.chrome.opacity(now)
    }

    /// Background at `now`: blends from the configured color to opaque
    /// black as the chrome fades out.
    pub fn background_color(&self, now: Instant) -> Color {
        blend(self.background, palette::BLACK, 1.0 - self.chrome.opacity(now))
    }

    /// Whether the component needs periodic ticks (fade running or a press
    /// held for long-press detection).
    pub fn needs_ticks(&self, now: Instant) -> bool {
        self.chrome.is_animating(now)
            || self
                .current_page
                .as_ref()
                .is_some_and(PreviewPage::is_pressed)
    }

    /// The page preceding `index`: `None` at the left edge, otherwise a
    /// freshly constructed page (pages are never cached).
    pub fn page_before(&self, index: usize) -> Option<PreviewPage> {
        if index < 1 {
            return None;
        }
        self.photos
            .get(index - 1)
            .map(|photo| PreviewPage::new(photo.clone(), index - 1))
    }

    /// The page following `index`: `None` at the right edge, otherwise a
    /// freshly constructed page.
    pub fn page_after(&self, index: usize) -> Option<PreviewPage> {
        let next = index + 1;
        if next >= self.photos.len() {
            return None;
        }
        self.photos
            .get(next)
            .map(|photo| PreviewPage::new(photo.clone(), next))
    }

    /// Process a message and return the effect the application should run.
    pub fn handle_message(&mut self, message: Message, now: Instant) -> Effect {
        match message {
            Message::Shown => self.shown(),
            Message::SwipeStarted(direction) => self.swipe_started(direction),
            Message::SwipeFinished { completed } => self.swipe_finished(completed),
            Message::Navigate(direction) => {
                let effect = self.swipe_started(direction);
                if self.transition.is_some() {
                    self.swipe_finished(true);
                }
                effect
            }
            Message::PageImageLoaded { index, result } => {
                self.install_image(index, result);
                Effect::None
            }
            Message::Page(message) => self.handle_page_message(message, now),
            Message::Header(message) => match header::update(message) {
                header::Event::DismissRequested => Effect::DismissRequested,
                header::Event::ShareRequested => self.share_requested(),
            },
            Message::Toolbar(toolbar::Message::ItemPressed(index)) => {
                Effect::ToolbarItemActivated(index)
            }
            Message::Share(message) => match share::update(message) {
                share::Event::SaveCopyRequested => {
                    self.share = None;
                    self.save_copy_effect()
                }
                share::Event::Dismissed => {
                    self.share = None;
                    Effect::None
                }
            },
            Message::SetFullScreen(value) => self.set_full_screen(value, now),
            Message::ToggleFullScreen => self.set_full_screen(!self.is_full_screen, now),
            Message::Resized(size) => {
                self.window_size = size;
                Effect::None
            }
            Message::Tick => self.poll_long_press(now),
        }
    }

    /// First display: installs the initial page and creates the header.
    /// Empty or unset photos leave everything untouched.
    fn shown(&mut self) -> Effect {
        self.displayed = true;
        if self.photos.is_empty() {
            return Effect::None;
        }

        let photo = self.photos[self.current_index].clone();
        let page = PreviewPage::new(photo, self.current_index);
        let effect = load_effect(&page);
        self.current_page = Some(page);

        if self.header.is_none() {
            self.header = Some(header::State::new(&self.photos, self.current_index));
        }
        effect
    }

    /// Begins a transition by staging the neighbor page in `direction`.
    /// At the edges there is no neighbor and nothing happens.
    fn swipe_started(&mut self, direction: Direction) -> Effect {
        if !self.displayed || self.transition.is_some() {
            return Effect::None;
        }
        let staged = match direction {
            Direction::Forward => self.page_after(self.current_index),
            Direction::Backward => self.page_before(self.current_index),
        };
        let Some(staged) = staged else {
            return Effect::None;
        };

        let effect = load_effect(&staged);
        self.transition = Some(Transition { direction, staged });
        effect
    }

    /// Finishes the in-flight transition. Only a completed transition
    /// commits `current_index` and refreshes the header; a cancelled one
    /// discards the staged page and changes nothing.
    fn swipe_finished(&mut self, completed: bool) -> Effect {
        let Some(transition) = self.transition.take() else {
            return Effect::None;
        };
        if !completed {
            return Effect::None;
        }

        self.current_index = transition.staged.index();
        self.current_page = Some(transition.staged);
        if let Some(header) = &mut self.header {
            header.refresh(&self.photos, self.current_index);
        }
        Effect::None
    }

    /// Routes an image-load result to whichever live page owns `index`;
    /// stale results are dropped silently.
    fn install_image(&mut self, index: usize, result: Result<ImageData, Error>) {
        if let Some(page) = self.current_page.as_mut().filter(|p| p.index() == index) {
            page.set_image(result);
            return;
        }
        if let Some(transition) = self
            .transition
            .as_mut()
            .filter(|t| t.staged.index() == index)
        {
            transition.staged.set_image(result);
        }
    }

    fn handle_page_message(&mut self, message: page::Message, now: Instant) -> Effect {
        match message {
            page::Message::CursorMoved(position) => {
                if let Some(page) = &mut self.current_page {
                    page.cursor_moved(position);
                }
                if let Some(drag) = &mut self.drag {
                    drag.latest = position;
                    let travel = drag.travel_x();
                    if self.transition.is_none() && travel.abs() >= SWIPE_BEGIN_THRESHOLD {
                        let direction = if travel < 0.0 {
                            Direction::Forward
                        } else {
                            Direction::Backward
                        };
                        return self.swipe_started(direction);
                    }
                }
                Effect::None
            }
            page::Message::Pressed => {
                let origin = self
                    .current_page
                    .as_ref()
                    .and_then(PreviewPage::cursor)
                    .unwrap_or(Point::ORIGIN);
                self.drag = Some(Drag {
                    origin,
                    latest: origin,
                });
                if let Some(page) = &mut self.current_page {
                    page.press_started(now);
                }
                Effect::None
            }
            page::Message::Released => self.press_released(now),
        }
    }

    /// Release resolves to exactly one of: commit/cancel an in-flight
    /// swipe, or treat a short stationary press as a full-screen toggle.
    fn press_released(&mut self, now: Instant) -> Effect {
        let drag = self.drag.take();
        let was_click = self
            .current_page
            .as_ref()
            .is_some_and(|page| page.press_is_click(now));
        if let Some(page) = &mut self.current_page {
            page.press_ended();
        }

        if let Some(direction) = self.transition.as_ref().map(|t| t.direction) {
            let travel = drag.map(|d| d.travel_x()).unwrap_or(0.0);
            // Commit only when the release lands past the threshold on the
            // staged side; dragging back across the origin cancels.
            let completed = match direction {
                Direction::Forward => travel <= -SWIPE_COMMIT_THRESHOLD,
                Direction::Backward => travel >= SWIPE_COMMIT_THRESHOLD,
            };
            return self.swipe_finished(completed);
        }

        if was_click && self.share.is_none() {
            return self.set_full_screen(!self.is_full_screen, now);
        }
        Effect::None
    }

    fn poll_long_press(&mut self, now: Instant) -> Effect {
        let gesture = self
            .current_page
            .as_mut()
            .and_then(|page| page.poll_long_press(now));
        match gesture {
            Some(gesture) => Effect::LongPress(gesture),
            None => Effect::None,
        }
    }

    /// Sets full-screen mode. Re-setting the current value is a no-op;
    /// changing it starts the chrome fade and reports the change.
    pub fn set_full_screen(&mut self, value: bool, now: Instant) -> Effect {
        if self.is_full_screen == value {
            return Effect::None;
        }
        self.is_full_screen = value;
        self.chrome.set(if value { 0.0 } else { 1.0 }, now);
        Effect::FullScreenChanged(value)
    }

    /// Opens the share surface for the current image; a page without a
    /// decoded image makes this a silent no-op.
    fn share_requested(&mut self) -> Effect {
        if self.current_image().is_none() {
            return Effect::None;
        }
        let anchor = self.share_button_anchor();
        self.share = Some(share::State::for_idiom(self.idiom(), anchor));
        Effect::None
    }

    fn save_copy_effect(&self) -> Effect {
        let Some(photo) = self.current_photo() else {
            return Effect::None;
        };
        let source = photo.source().to_path_buf();
        let suggested_name = source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| String::from("photo"));
        Effect::SaveImageCopy {
            source,
            suggested_name,
        }
    }

    /// Approximate frame of the header's share button, used to anchor the
    /// tablet popover.
    fn share_button_anchor(&self) -> Rectangle {
        let width = 88.0;
        Rectangle::new(
            Point::new((self.window_size.width - width).max(0.0), 0.0),
            Size::new(width, layout::HEADER_HEIGHT),
        )
    }

    /// Render the browser: the page surface with header, toolbar, and the
    /// share surface layered above it.
    pub fn view(&self) -> Element<'_, Message> {
        let now = Instant::now();
        let opacity = self.chrome.opacity(now);

        let mut layers = Stack::new().width(Length::Fill).height(Length::Fill);

        if let Some(page) = &self.current_page {
            layers = layers.push(page.view().map(Message::Page));
        }

        if let Some(header_state) = &self.header {
            if opacity > 0.0 {
                let header_view = header::view(header::ViewContext {
                    state: header_state,
                    opacity,
                })
                .map(Message::Header);
                layers = layers.push(
                    container(header_view)
                        .width(Length::Fill)
                        .align_y(iced::alignment::Vertical::Top),
                );
            }
        }

        if self.toolbar_active() && opacity > 0.0 {
            let toolbar_view = toolbar::view(toolbar::ViewContext {
                items: &self.toolbar_items,
                idiom: self.idiom(),
                item_gap: self.toolbar_gap,
                opacity,
            })
            .map(Message::Toolbar);
            layers = layers.push(
                container(toolbar_view)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .align_y(iced::alignment::Vertical::Bottom),
            );
        }

        if let Some(share_state) = &self.share {
            layers = layers.push(share::view(share_state).map(Message::Share));
        }

        container(layers)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_theme| container::Style {
                background: Some(self.background_color(now).into()),
                ..container::Style::default()
            })
            .into()
    }
}

fn load_effect(page: &PreviewPage) -> Effect {
    Effect::LoadImage {
        index: page.index(),
        path: page.photo().source().to_path_buf(),
    }
}

fn blend(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    Color {
        r: from.r + (to.r - from.r) * t,
        g: from.g + (to.g - from.g) * t,
        b: from.b + (to.b - from.b) * t,
        a: from.a + (to.a - from.a) * t,
    }
}
