//! Glyph fallback chain.
//!
//! A character is looked up in four steps, stopping at the first hit:
//!
//! 1. the descriptor's family, requested character
//! 2. family-agnostic glyphs, requested character
//! 3. the descriptor's family, fallback character
//! 4. family-agnostic glyphs, fallback character
//!
//! When every step misses the character has no glyph and layout drops it.

use crate::font::{FontDescriptor, Glyph, GlyphPrefetch, GlyphProvider};

/// The `(family, character)` pairs tried for `ch`, in order.
///
/// Steps that would repeat an earlier lookup (no family, or the fallback
/// character itself was requested) are skipped.
pub fn lookup_chain(
    font: &FontDescriptor,
    ch: char,
) -> impl Iterator<Item = (Option<&str>, char)> + '_ {
    let family = font.family();
    let fallback = font.fallback_char();
    let steps = [(family, ch), (None, ch), (family, fallback), (None, fallback)];
    steps
        .into_iter()
        .enumerate()
        .filter(move |(i, step)| !steps[..*i].contains(step))
        .map(|(_, step)| step)
}

/// Resolve the glyph used to render `ch`, or `None` when it must be dropped.
pub fn resolve<'p, P>(provider: &'p P, font: &FontDescriptor, ch: char) -> Option<&'p Glyph>
where
    P: GlyphProvider + ?Sized,
{
    let glyph = lookup_chain(font, ch)
        .find_map(|(family, candidate)| provider.glyph(family, candidate));
    if glyph.is_none() {
        tracing::debug!("no glyph for {:?} in {}, dropping", ch, font);
    }
    glyph
}

/// Same chain as [`resolve`] over the asynchronous provider interface.
pub async fn resolve_async<P>(provider: &P, font: &FontDescriptor, ch: char) -> Option<Glyph>
where
    P: GlyphPrefetch + ?Sized,
{
    for (family, candidate) in lookup_chain(font, ch) {
        if let Some(glyph) = provider.load_glyph(family, candidate).await {
            return Some(glyph);
        }
    }
    None
}

/// Warm a provider's cache with every glyph `text` will resolve to.
///
/// Returns the number of characters that resolved.
pub async fn prefetch_text<P>(provider: &P, font: &FontDescriptor, text: &str) -> usize
where
    P: GlyphPrefetch + ?Sized,
{
    let mut resolved = 0;
    for ch in text.chars() {
        if resolve_async(provider, font, ch).await.is_some() {
            resolved += 1;
        }
    }
    resolved
}

#[cfg(test)]
mod tests {
    use core::cell::RefCell;

    use super::*;
    use crate::font::GlyphTable;

    fn font() -> FontDescriptor {
        FontDescriptor::new(Some("Serif"), 16.0)
    }

    #[test]
    fn chain_order_with_family() {
        assert_eq!(
            lookup_chain(&font(), 'a').collect::<Vec<_>>(),
            [
                (Some("Serif"), 'a'),
                (None, 'a'),
                (Some("Serif"), '?'),
                (None, '?'),
            ]
        );
    }

    #[test]
    fn chain_collapses_without_family() {
        let font = FontDescriptor::new(None, 16.0);
        assert_eq!(lookup_chain(&font, 'a').collect::<Vec<_>>(), [(None, 'a'), (None, '?')]);
        assert_eq!(lookup_chain(&font, '?').collect::<Vec<_>>(), [(None, '?')]);
    }

    /// Records every lookup it receives.
    struct Recording {
        table: GlyphTable,
        lookups: RefCell<Vec<(Option<String>, char)>>,
    }

    impl GlyphProvider for Recording {
        fn glyph(&self, family: Option<&str>, ch: char) -> Option<&Glyph> {
            self.lookups.borrow_mut().push((family.map(str::to_owned), ch));
            self.table.glyph(family, ch)
        }
    }

    #[test]
    fn resolve_stops_at_first_hit() {
        let provider = Recording {
            table: GlyphTable::new().with_glyph(None, Glyph::new('a')),
            lookups: RefCell::new(Vec::new()),
        };
        assert!(resolve(&provider, &font(), 'a').is_some());
        assert_eq!(
            provider.lookups.into_inner(),
            [(Some("Serif".to_owned()), 'a'), (None, 'a')]
        );
    }

    #[test]
    fn family_glyph_wins_over_generic() {
        let table = GlyphTable::new()
            .with_glyph(Some("Serif"), Glyph::new('a').with_advance(1.0))
            .with_glyph(None, Glyph::new('a').with_advance(2.0));
        assert_eq!(resolve(&table, &font(), 'a').map(|g| g.x_advance), Some(1.0));
    }

    #[test]
    fn generic_glyph_wins_over_family_fallback() {
        let table = GlyphTable::new()
            .with_glyph(None, Glyph::new('★'))
            .with_glyph(Some("Serif"), Glyph::new('?'));
        assert_eq!(resolve(&table, &font(), '★').map(|g| g.character), Some('★'));
    }

    #[test]
    fn falls_back_to_substitute_character() {
        let table = GlyphTable::new()
            .with_glyph(None, Glyph::new('?').with_advance(2.0))
            .with_glyph(Some("Serif"), Glyph::new('?').with_advance(1.0));
        assert_eq!(resolve(&table, &font(), 'z').map(|g| g.x_advance), Some(1.0));

        let table = GlyphTable::new().with_glyph(None, Glyph::new('?').with_advance(2.0));
        assert_eq!(resolve(&table, &font(), 'z').map(|g| g.x_advance), Some(2.0));
    }

    #[test]
    fn custom_fallback_character() {
        let font = font().with_fallback_char('#');
        let table = GlyphTable::new()
            .with_glyph(Some("Serif"), Glyph::new('?'))
            .with_glyph(Some("Serif"), Glyph::new('#'));
        assert_eq!(resolve(&table, &font, 'z').map(|g| g.character), Some('#'));
    }

    #[test]
    fn unresolvable_character_is_none() {
        let table = GlyphTable::new().with_glyph(Some("Sans"), Glyph::new('?'));
        assert!(resolve(&table, &font(), 'z').is_none());
    }

    #[test]
    fn async_chain_matches_sync_chain() {
        let table = GlyphTable::new()
            .with_glyph(None, Glyph::new('a').with_advance(2.0))
            .with_glyph(Some("Serif"), Glyph::new('?').with_advance(1.0));
        for ch in ['a', 'b'] {
            let sync = resolve(&table, &font(), ch).cloned();
            let async_ = pollster::block_on(resolve_async(&table, &font(), ch));
            assert_eq!(sync, async_);
        }
    }

    #[test]
    fn prefetch_counts_resolved_characters() {
        let table = GlyphTable::new().with_glyph(None, Glyph::new('a'));
        let font = FontDescriptor::new(None, 16.0);
        assert_eq!(pollster::block_on(prefetch_text(&table, &font, "abca")), 2);
    }
}
