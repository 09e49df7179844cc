use raylib::prelude::Color;

pub const FPS: u32 = 60;                      // Frames per second

pub const PADDING_X: f32 = 40.0;              // Horizontal margin of the column
pub const PADDING_TOP: f32 = 40.0;            // Space above the title
pub const CARD_HEIGHT: f32 = 300.0;           // Height of the image card
pub const BUTTON_HEIGHT: f32 = 44.0;
pub const BUTTON_GAP: f32 = 16.0;             // Space between Back and Next
pub const INPUT_HEIGHT: f32 = 40.0;
pub const GO_BUTTON_WIDTH: f32 = 72.0;

pub const TITLE_SIZE: i32 = 24;
pub const CAPTION_SIZE: i32 = 20;
pub const COUNTER_SIZE: i32 = 16;
pub const LABEL_SIZE: i32 = 18;

pub const TITLE_GAP: f32 = 16.0;              // Below the title
pub const CARD_GAP: f32 = 16.0;               // Below the card
pub const CAPTION_GAP: f32 = 24.0;            // Below the caption
pub const COUNTER_GAP: f32 = 16.0;            // Below the counter
pub const BUTTONS_GAP: f32 = 32.0;            // Below the button row

pub const BACKGROUND: Color = Color::new(250, 248, 255, 255);
pub const CARD_COLOR: Color = Color::new(220, 216, 228, 255);
pub const TEXT_COLOR: Color = Color::new(28, 27, 31, 255);
pub const MUTED_TEXT: Color = Color::new(73, 69, 79, 255);
pub const ACCENT: Color = Color::new(103, 80, 164, 255);
pub const ACCENT_TEXT: Color = Color::WHITE;
pub const ERROR_COLOR: Color = Color::new(179, 38, 30, 255);
