use raylib::prelude::*;
use slideshow_viewer::strings::{APP_TITLE, BUTTON_BACK, BUTTON_GO, BUTTON_NEXT, JUMP_LABEL};
use slideshow_viewer::{JumpInput, SlideState, Strings};

use crate::constants::*;
use crate::texture_loader::load_texture_with_exif_rotation;

/// Screen rectangles for one frame, laid out as a single centered column.
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    pub title_y: f32,
    pub card: Rectangle,
    pub caption_y: f32,
    pub counter_y: f32,
    pub back: Rectangle,
    pub next: Rectangle,
    pub jump_label_y: f32,
    pub input: Rectangle,
    pub go: Rectangle,
}

impl Layout {
    pub fn new(screen_width: f32, screen_height: f32) -> Self {
        let content_width = (screen_width - 2.0 * PADDING_X).max(1.0);
        let content_height = TITLE_SIZE as f32 + TITLE_GAP
            + CARD_HEIGHT + CARD_GAP
            + CAPTION_SIZE as f32 + CAPTION_GAP
            + COUNTER_SIZE as f32 + COUNTER_GAP
            + BUTTON_HEIGHT + BUTTONS_GAP
            + LABEL_SIZE as f32 + 8.0 + INPUT_HEIGHT;

        let x = PADDING_X;
        let mut y = PADDING_TOP.max((screen_height - content_height) * 0.5);

        let title_y = y;
        y += TITLE_SIZE as f32 + TITLE_GAP;

        let card = Rectangle::new(x, y, content_width, CARD_HEIGHT);
        y += CARD_HEIGHT + CARD_GAP;

        let caption_y = y;
        y += CAPTION_SIZE as f32 + CAPTION_GAP;

        let counter_y = y;
        y += COUNTER_SIZE as f32 + COUNTER_GAP;

        let button_width = ((content_width - BUTTON_GAP) * 0.5).max(1.0);
        let back = Rectangle::new(x, y, button_width, BUTTON_HEIGHT);
        let next = Rectangle::new(x + button_width + BUTTON_GAP, y, button_width, BUTTON_HEIGHT);
        y += BUTTON_HEIGHT + BUTTONS_GAP;

        let jump_label_y = y;
        y += LABEL_SIZE as f32 + 8.0;

        let input_width = (content_width - GO_BUTTON_WIDTH - BUTTON_GAP).max(1.0);
        let input = Rectangle::new(x, y, input_width, INPUT_HEIGHT);
        let go = Rectangle::new(x + input_width + BUTTON_GAP, y, GO_BUTTON_WIDTH, INPUT_HEIGHT);

        Self { title_y, card, caption_y, counter_y, back, next, jump_label_y, input, go }
    }
}

/// Part of a `tex_w` x `tex_h` texture that fills `dest_w` x `dest_h` without
/// distortion, centered and cropped on the overflowing axis.
pub fn crop_source(tex_w: f32, tex_h: f32, dest_w: f32, dest_h: f32) -> Rectangle {
    let tex_ratio = tex_w / tex_h;
    let dest_ratio = dest_w / dest_h;
    if tex_ratio > dest_ratio {
        let w = tex_h * dest_ratio;
        Rectangle::new((tex_w - w) * 0.5, 0.0, w, tex_h)
    } else {
        let h = tex_w / dest_ratio;
        Rectangle::new(0.0, (tex_h - h) * 0.5, tex_w, h)
    }
}

/// What the user asked for during one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Previous,
    Next,
    Submit,
}

pub struct Viewer {
    state: SlideState,
    strings: Strings,
    // Same order as the deck; None when the image could not be loaded
    textures: Vec<Option<Texture2D>>,
    input: JumpInput,
    jump_rejected: bool,
}

impl Viewer {
    pub fn new(rl: &mut RaylibHandle, thread: &RaylibThread, state: SlideState, strings: Strings) -> Self {
        let mut textures = Vec::with_capacity(state.deck().len());
        for slide in state.deck() {
            match load_texture_with_exif_rotation(rl, thread, slide.image.path()) {
                Ok(texture) => textures.push(Some(texture)),
                Err(e) => {
                    log::error!("{:#}", e);
                    textures.push(None);
                }
            }
        }
        let loaded = textures.iter().filter(|t| t.is_some()).count();
        log::info!("Loaded {}/{} images", loaded, textures.len());

        Self {
            state,
            strings,
            textures,
            input: JumpInput::new(),
            jump_rejected: false,
        }
    }

    pub fn handle_input(&mut self, rl: &mut RaylibHandle) {
        let layout = Layout::new(rl.get_screen_width() as f32, rl.get_screen_height() as f32);

        while let Some(c) = rl.get_char_pressed() {
            if self.input.push(c) {
                self.jump_rejected = false;
            }
        }
        if rl.is_key_pressed(KeyboardKey::KEY_BACKSPACE) && self.input.pop().is_some() {
            self.jump_rejected = false;
        }

        let mut actions = Vec::new();
        if rl.is_key_pressed(KeyboardKey::KEY_LEFT) || rl.is_key_pressed(KeyboardKey::KEY_PAGE_UP) {
            actions.push(Action::Previous);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) || rl.is_key_pressed(KeyboardKey::KEY_PAGE_DOWN) {
            actions.push(Action::Next);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_ENTER) || rl.is_key_pressed(KeyboardKey::KEY_KP_ENTER) {
            actions.push(Action::Submit);
        }
        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            let mouse = rl.get_mouse_position();
            if layout.back.check_collision_point_rec(mouse) {
                actions.push(Action::Previous);
            } else if layout.next.check_collision_point_rec(mouse) {
                actions.push(Action::Next);
            } else if layout.go.check_collision_point_rec(mouse) {
                actions.push(Action::Submit);
            }
        }

        for action in actions {
            self.apply(action);
        }
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::Previous => self.state.previous(),
            Action::Next => self.state.next(),
            Action::Submit => match self.input.submit(&mut self.state) {
                Ok(()) => self.jump_rejected = false,
                Err(e) => {
                    log::info!("Ignoring jump: {}", e);
                    self.jump_rejected = true;
                }
            },
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        let layout = Layout::new(d.get_screen_width() as f32, d.get_screen_height() as f32);
        let x = layout.card.x as i32;

        d.clear_background(BACKGROUND);

        d.draw_text(self.strings.get(APP_TITLE), x, layout.title_y as i32, TITLE_SIZE, TEXT_COLOR);

        let slide = self.state.current();
        let caption = self.strings.resolve(&slide.caption);
        self.draw_card(d, layout.card);

        draw_centered(d, caption, layout.card, layout.caption_y, CAPTION_SIZE, TEXT_COLOR);
        let counter = self.strings.counter(self.state.position());
        draw_centered(d, &counter, layout.card, layout.counter_y, COUNTER_SIZE, MUTED_TEXT);

        draw_button(d, layout.back, self.strings.get(BUTTON_BACK));
        draw_button(d, layout.next, self.strings.get(BUTTON_NEXT));

        d.draw_text(self.strings.get(JUMP_LABEL), x, layout.jump_label_y as i32, LABEL_SIZE, MUTED_TEXT);
        d.draw_rectangle_rec(layout.input, Color::WHITE);
        let outline = if self.jump_rejected { ERROR_COLOR } else { MUTED_TEXT };
        d.draw_rectangle_lines_ex(layout.input, if self.jump_rejected { 2.0 } else { 1.0 }, outline);
        let text_y = layout.input.y + (layout.input.height - LABEL_SIZE as f32) * 0.5;
        let text = format!("{}_", self.input.as_str());
        d.draw_text(&text, (layout.input.x + 10.0) as i32, text_y as i32, LABEL_SIZE, TEXT_COLOR);
        draw_button(d, layout.go, self.strings.get(BUTTON_GO));
    }

    fn draw_card(&self, d: &mut RaylibDrawHandle, card: Rectangle) {
        d.draw_rectangle_rec(card, CARD_COLOR);
        match self.textures.get(self.state.index()).and_then(Option::as_ref) {
            Some(texture) => {
                let source = crop_source(texture.width() as f32, texture.height() as f32, card.width, card.height);
                d.draw_texture_pro(texture, source, card, Vector2::new(0.0, 0.0), 0.0, Color::WHITE);
            }
            None => {
                let name = self.state.current().image.path().display().to_string();
                let y = card.y + (card.height - COUNTER_SIZE as f32) * 0.5;
                draw_centered(d, &name, card, y, COUNTER_SIZE, ERROR_COLOR);
            }
        }
    }
}

fn draw_centered(d: &mut RaylibDrawHandle, text: &str, column: Rectangle, y: f32, size: i32, color: Color) {
    let width = measure_text(text, size) as f32;
    let x = column.x + ((column.width - width) * 0.5).max(0.0);
    d.draw_text(text, x as i32, y as i32, size, color);
}

fn draw_button(d: &mut RaylibDrawHandle, rec: Rectangle, label: &str) {
    d.draw_rectangle_rounded(rec, 0.5, 8, ACCENT);
    let y = rec.y + (rec.height - LABEL_SIZE as f32) * 0.5;
    draw_centered(d, label, rec, y, LABEL_SIZE, ACCENT_TEXT);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_texture_is_cropped_horizontally() {
        let src = crop_source(400.0, 100.0, 200.0, 100.0);
        assert_eq!((src.x, src.y, src.width, src.height), (100.0, 0.0, 200.0, 100.0));
    }

    #[test]
    fn tall_texture_is_cropped_vertically() {
        let src = crop_source(100.0, 400.0, 100.0, 100.0);
        assert_eq!((src.x, src.y, src.width, src.height), (0.0, 150.0, 100.0, 100.0));
    }

    #[test]
    fn controls_do_not_overlap() {
        let layout = Layout::new(480.0, 800.0);
        assert!(layout.back.x + layout.back.width < layout.next.x);
        assert!(layout.input.x + layout.input.width < layout.go.x);
        assert!(layout.card.y + layout.card.height < layout.caption_y);
        assert!(layout.back.y + layout.back.height < layout.input.y);
        assert!(layout.title_y >= PADDING_TOP);
    }
}
