/// Even spacing of characters along a curve and glyph transforms.
pub(crate) mod glyphs;
pub(crate) mod words;
