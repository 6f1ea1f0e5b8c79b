use crate::foundation::core::Rgb;

/// Number of entries in every palette and color table.
pub const PALETTE_SIZE: usize = 256;

/// Caller-editable 256-entry palette with a `changed` flag.
///
/// Writers go through [`Palette::set`] / [`Palette::set_range`], which raise the flag. The engine
/// observes and clears the flag before any palette-dependent primitive runs, so draws always
/// resolve colors against the current entries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    entries: [Rgb; PALETTE_SIZE],
    changed: bool,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            entries: [Rgb::default(); PALETTE_SIZE],
            changed: false,
        }
    }
}

impl Palette {
    /// All-black palette with the `changed` flag clear.
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow every entry.
    pub fn entries(&self) -> &[Rgb; PALETTE_SIZE] {
        &self.entries
    }

    /// Read one entry.
    pub fn get(&self, index: u8) -> Rgb {
        self.entries[usize::from(index)]
    }

    /// Replace one entry and raise the `changed` flag.
    pub fn set(&mut self, index: u8, color: Rgb) {
        self.entries[usize::from(index)] = color;
        self.changed = true;
    }

    /// Replace consecutive entries starting at `first`, truncated at the table end.
    pub fn set_range(&mut self, first: u8, colors: &[Rgb]) {
        let start = usize::from(first);
        let n = colors.len().min(PALETTE_SIZE - start);
        self.entries[start..start + n].copy_from_slice(&colors[..n]);
        self.changed = true;
    }

    /// Return `true` if the palette changed since the flag was last cleared.
    pub fn is_changed(&self) -> bool {
        self.changed
    }

    /// Clear the flag, returning whether it was raised.
    pub fn take_changed(&mut self) -> bool {
        std::mem::replace(&mut self.changed, false)
    }
}

/// Index of the entry closest to `(r, g, b)`.
///
/// Distance is `30*dr² + 59*dg² + 11*db²`; ties resolve to the lowest index.
pub fn nearest_color(table: &[Rgb; PALETTE_SIZE], r: u8, g: u8, b: u8) -> u8 {
    let mut best = 0usize;
    let mut best_d = i32::MAX;
    for (i, c) in table.iter().enumerate() {
        let dr = i32::from(r) - i32::from(c.r);
        let dg = i32::from(g) - i32::from(c.g);
        let db = i32::from(b) - i32::from(c.b);
        let d = dr * dr * 30 + dg * dg * 59 + db * db * 11;
        if d < best_d {
            best_d = d;
            best = i;
        }
    }
    best as u8
}

#[cfg(test)]
#[path = "../../tests/unit/canvas/palette.rs"]
mod tests;
