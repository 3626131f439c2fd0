use core::future::{Future, ready};

use hashbrown::HashMap;

use crate::font::Glyph;

/// Source of pre-rasterized glyph metrics.
///
/// `family = None` addresses family-agnostic glyph sets such as icon fonts.
/// Implementations own their glyphs; layout only borrows them.
pub trait GlyphProvider {
    fn glyph(&self, family: Option<&str>, ch: char) -> Option<&Glyph>;
}

/// Asynchronous counterpart of [`GlyphProvider`], used to pre-warm glyph caches.
///
/// Lookups have the same semantics as [`GlyphProvider::glyph`] but hand back
/// owned metrics. Layout never awaits this.
pub trait GlyphPrefetch {
    fn load_glyph(&self, family: Option<&str>, ch: char) -> impl Future<Output = Option<Glyph>>;
}

impl<P: GlyphProvider + ?Sized> GlyphProvider for &P {
    fn glyph(&self, family: Option<&str>, ch: char) -> Option<&Glyph> {
        (**self).glyph(family, ch)
    }
}

/// In-memory glyph store keyed by family and character.
#[derive(Debug, Default, Clone)]
pub struct GlyphTable {
    families: HashMap<String, HashMap<char, Glyph>>,
    generic: HashMap<char, Glyph>,
}

impl GlyphTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a glyph, replacing any previous glyph for the same key.
    pub fn insert(&mut self, family: Option<&str>, glyph: Glyph) {
        let glyphs = match family {
            Some(family) => self.families.entry(family.to_owned()).or_default(),
            None => &mut self.generic,
        };
        glyphs.insert(glyph.character, glyph);
    }

    pub fn with_glyph(mut self, family: Option<&str>, glyph: Glyph) -> Self {
        self.insert(family, glyph);
        self
    }

    pub fn remove(&mut self, family: Option<&str>, ch: char) -> Option<Glyph> {
        match family {
            Some(family) => self.families.get_mut(family)?.remove(&ch),
            None => self.generic.remove(&ch),
        }
    }

    /// Total number of glyphs across all families.
    pub fn len(&self) -> usize {
        self.generic.len() + self.families.values().map(HashMap::len).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl GlyphProvider for GlyphTable {
    fn glyph(&self, family: Option<&str>, ch: char) -> Option<&Glyph> {
        match family {
            Some(family) => self.families.get(family)?.get(&ch),
            None => self.generic.get(&ch),
        }
    }
}

impl GlyphPrefetch for GlyphTable {
    fn load_glyph(&self, family: Option<&str>, ch: char) -> impl Future<Output = Option<Glyph>> {
        ready(self.glyph(family, ch).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_scoped_by_family() {
        let table = GlyphTable::new()
            .with_glyph(Some("Serif"), Glyph::new('a').with_advance(5.0))
            .with_glyph(None, Glyph::new('*').with_advance(8.0));

        assert_eq!(table.glyph(Some("Serif"), 'a').map(|g| g.x_advance), Some(5.0));
        assert!(table.glyph(None, 'a').is_none());
        assert!(table.glyph(Some("Sans"), 'a').is_none());
        assert!(table.glyph(Some("Serif"), '*').is_none());
        assert_eq!(table.glyph(None, '*').map(|g| g.x_advance), Some(8.0));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn insert_replaces_and_remove_deletes() {
        let mut table = GlyphTable::new();
        table.insert(Some("Serif"), Glyph::new('a').with_advance(5.0));
        table.insert(Some("Serif"), Glyph::new('a').with_advance(6.0));
        assert_eq!(table.len(), 1);
        assert_eq!(table.glyph(Some("Serif"), 'a').map(|g| g.x_advance), Some(6.0));

        assert!(table.remove(Some("Serif"), 'a').is_some());
        assert!(table.remove(Some("Mono"), 'a').is_none());
        assert!(table.is_empty());
    }

    #[test]
    fn async_lookup_matches_sync_lookup() {
        let table = GlyphTable::new().with_glyph(None, Glyph::new('x').with_advance(3.0));
        let loaded = pollster::block_on(table.load_glyph(None, 'x'));
        assert_eq!(loaded.as_ref(), table.glyph(None, 'x'));
        assert!(pollster::block_on(table.load_glyph(None, 'y')).is_none());
    }
}
