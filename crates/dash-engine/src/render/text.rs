//! Glyph layout for in-world text (score popups).
//!
//! Each printable ASCII character becomes one glyph draw instance carrying
//! its code; the rendering backend maps codes to a font atlas.

use glam::Vec2;

use crate::render::instance::{DrawInstance, DrawKind, DrawList};

/// Horizontal advance as a fraction of glyph size.
pub const GLYPH_ADVANCE: f32 = 0.6;

const PRINTABLE_START: u32 = 32;
const PRINTABLE_END: u32 = 126;

/// Push one glyph instance per printable character. Characters outside the
/// printable range are skipped, but the cursor still advances to preserve
/// spacing.
pub fn push_text(list: &mut DrawList, text: &str, pos: Vec2, size: f32, color: [f32; 4]) {
    let mut cursor_x = pos.x;
    for c in text.chars() {
        let code = c as u32;
        if (PRINTABLE_START..=PRINTABLE_END).contains(&code) {
            list.push(DrawInstance {
                kind: DrawKind::Glyph.as_f32(),
                x: cursor_x,
                y: pos.y,
                w: size,
                h: size,
                color,
                p0: code as f32,
                ..Default::default()
            });
        }
        cursor_x += size * GLYPH_ADVANCE;
    }
}

/// Width of `text` at `size`, matching `push_text`'s cursor advance.
pub fn text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * GLYPH_ADVANCE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_glyph_per_printable_char() {
        let mut list = DrawList::new();
        push_text(&mut list, "+20", Vec2::new(100.0, 50.0), 16.0, [1.0; 4]);
        assert_eq!(list.len(), 3);
        assert_eq!(list.instances()[0].p0, '+' as u32 as f32);
        assert_eq!(list.instances()[1].p0, '2' as u32 as f32);
    }

    #[test]
    fn unprintable_chars_skipped_but_spacing_kept() {
        let mut list = DrawList::new();
        push_text(&mut list, "a\tb", Vec2::ZERO, 10.0, [1.0; 4]);
        assert_eq!(list.len(), 2);
        let a = list.instances()[0];
        let b = list.instances()[1];
        // 'b' sits two advances after 'a' — the tab kept its slot.
        assert_eq!(b.x - a.x, 2.0 * 10.0 * GLYPH_ADVANCE);
    }

    #[test]
    fn text_width_matches_advance() {
        assert_eq!(text_width("+100", 10.0), 4.0 * 10.0 * GLYPH_ADVANCE);
    }
}
