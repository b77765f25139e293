//! Static font-metric tables for the two built-in PDF faces.
//!
//! Character widths are in em units (relative to font size), taken from the
//! standard Helvetica AFM metrics. Multiply by the font size to get a width
//! in that size's unit, so the same table serves millimeter print sizing and
//! pixel screen sizing.
//!
//! The multiplication and division signs the questions use (U+00D7, U+00F7)
//! carry an explicit entry; any other non-ASCII character falls back to
//! `average_char_width`. Tables cover ASCII 0x20..=0x7E (95 printable
//! characters), index = (char as usize) - 32.

#![allow(dead_code)]

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Font face enum
// ────────────────────────────────────────────────────────────────────────────

/// The two built-in faces the PDF exporter embeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontFace {
    /// Question body text.
    Helvetica,
    /// Title block.
    HelveticaBold,
}

// ────────────────────────────────────────────────────────────────────────────
// Metric table
// ────────────────────────────────────────────────────────────────────────────

/// Static character-width table for one face.
///
/// `widths[i]` = width of ASCII character `(i + 32)` in em units, covering
/// 0x20 (space) through 0x7E (~).
pub struct FontMetricTable {
    pub face: FontFace,
    widths: [f32; 95],
    /// Width of the arithmetic signs × (U+00D7) and ÷ (U+00F7).
    pub sign_width: f32,
    /// Fallback width for any other non-ASCII character.
    pub average_char_width: f32,
    pub space_width: f32,
}

impl FontMetricTable {
    /// Measures the rendered width of a string in em units.
    pub fn measure_str(&self, s: &str) -> f32 {
        s.chars()
            .map(|c| match c {
                '×' | '÷' => self.sign_width,
                _ => {
                    let code = c as usize;
                    if (32..=126).contains(&code) {
                        self.widths[code - 32]
                    } else {
                        self.average_char_width
                    }
                }
            })
            .sum()
    }

    /// Width of `s` in millimeters when set at `font_size_mm`.
    pub fn width_mm(&self, s: &str, font_size_mm: f32) -> f32 {
        self.measure_str(s) * font_size_mm
    }

    /// Greedy word-wrap: splits `s` into lines no wider than `max_width_em`.
    ///
    /// A single word wider than the limit gets its own line rather than being
    /// split mid-word. An empty or all-whitespace string wraps to no lines.
    pub fn wrap_to_width(&self, s: &str, max_width_em: f32) -> Vec<String> {
        let words: Vec<&str> = s.split_whitespace().collect();
        if words.is_empty() {
            return vec![];
        }

        let mut lines: Vec<String> = Vec::new();
        let mut current = String::new();
        let mut current_width = 0.0_f32;

        for word in words {
            let word_w = self.measure_str(word);
            if current.is_empty() {
                current.push_str(word);
                current_width = word_w;
            } else if current_width + self.space_width + word_w > max_width_em {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
                current_width = word_w;
            } else {
                current.push(' ');
                current.push_str(word);
                current_width += self.space_width + word_w;
            }
        }
        lines.push(current);
        lines
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Static width tables  (95 ASCII printable characters each)
// ────────────────────────────────────────────────────────────────────────────

/// Helvetica regular, AFM widths / 1000.
static HELVETICA_TABLE: FontMetricTable = FontMetricTable {
    face: FontFace::Helvetica,
    #[rustfmt::skip]
    widths: [
        // sp     !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
        0.278, 0.278, 0.355, 0.556, 0.556, 0.889, 0.667, 0.191, 0.333, 0.333, 0.389, 0.584, 0.278, 0.333, 0.278, 0.278,
        // 0      1      2      3      4      5      6      7      8      9
        0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556,
        // :      ;      <      =      >      ?      @
        0.278, 0.278, 0.584, 0.584, 0.584, 0.556, 1.015,
        // A      B      C      D      E      F      G      H      I      J      K      L      M
        0.667, 0.667, 0.722, 0.722, 0.667, 0.611, 0.778, 0.722, 0.278, 0.500, 0.667, 0.556, 0.833,
        // N      O      P      Q      R      S      T      U      V      W      X      Y      Z
        0.722, 0.778, 0.667, 0.778, 0.722, 0.667, 0.611, 0.722, 0.667, 0.944, 0.667, 0.667, 0.611,
        // [      \      ]      ^      _      `
        0.278, 0.278, 0.278, 0.469, 0.556, 0.333,
        // a      b      c      d      e      f      g      h      i      j      k      l      m
        0.556, 0.556, 0.500, 0.556, 0.556, 0.278, 0.556, 0.556, 0.222, 0.222, 0.500, 0.222, 0.833,
        // n      o      p      q      r      s      t      u      v      w      x      y      z
        0.556, 0.556, 0.556, 0.556, 0.333, 0.500, 0.278, 0.556, 0.500, 0.722, 0.500, 0.500, 0.500,
        // {      |      }      ~
        0.334, 0.260, 0.334, 0.584,
    ],
    sign_width: 0.584,
    average_char_width: 0.536,
    space_width: 0.278,
};

/// Helvetica bold, AFM widths / 1000.
static HELVETICA_BOLD_TABLE: FontMetricTable = FontMetricTable {
    face: FontFace::HelveticaBold,
    #[rustfmt::skip]
    widths: [
        // sp     !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
        0.278, 0.333, 0.474, 0.556, 0.556, 0.889, 0.722, 0.238, 0.333, 0.333, 0.389, 0.584, 0.278, 0.333, 0.278, 0.278,
        // 0      1      2      3      4      5      6      7      8      9
        0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556,
        // :      ;      <      =      >      ?      @
        0.333, 0.333, 0.584, 0.584, 0.584, 0.611, 0.975,
        // A      B      C      D      E      F      G      H      I      J      K      L      M
        0.722, 0.722, 0.722, 0.722, 0.667, 0.611, 0.778, 0.722, 0.278, 0.556, 0.722, 0.611, 0.833,
        // N      O      P      Q      R      S      T      U      V      W      X      Y      Z
        0.722, 0.778, 0.667, 0.778, 0.722, 0.667, 0.611, 0.722, 0.667, 0.944, 0.667, 0.667, 0.611,
        // [      \      ]      ^      _      `
        0.333, 0.278, 0.333, 0.584, 0.556, 0.333,
        // a      b      c      d      e      f      g      h      i      j      k      l      m
        0.556, 0.611, 0.556, 0.611, 0.556, 0.333, 0.611, 0.611, 0.278, 0.278, 0.556, 0.278, 0.889,
        // n      o      p      q      r      s      t      u      v      w      x      y      z
        0.611, 0.611, 0.611, 0.611, 0.389, 0.556, 0.333, 0.611, 0.556, 0.778, 0.556, 0.556, 0.500,
        // {      |      }      ~
        0.389, 0.280, 0.389, 0.584,
    ],
    sign_width: 0.584,
    average_char_width: 0.562,
    space_width: 0.278,
};

/// Returns the static metric table for a face.
pub fn get_metrics(face: FontFace) -> &'static FontMetricTable {
    match face {
        FontFace::Helvetica => &HELVETICA_TABLE,
        FontFace::HelveticaBold => &HELVETICA_BOLD_TABLE,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
