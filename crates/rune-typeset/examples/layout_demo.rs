/// Demonstration of incremental glyph layout with undo.
///
/// Builds a small in-memory glyph set, lays out two lines of text, and walks
/// back through the edits with `remove_last`.
///
/// Run with: RUST_LOG=trace cargo run -p rune-typeset --example layout_demo
use rune_config::RuneConfig;
use rune_typeset::{Glyph, GlyphLayout, GlyphTable, LayoutConfig};

fn demo_glyphs(family: Option<&str>) -> GlyphTable {
    let mut table = GlyphTable::new();
    for ch in 'a'..='z' {
        // Ascenders sit lower in the box, so their baseline is further from the top.
        let tall = "bdfhklt".contains(ch);
        let (height, baseline) = if tall { (14.0, 12.0) } else { (10.0, 8.0) };
        table.insert(
            family,
            Glyph::new(ch)
                .with_offset(0.5, 1.0)
                .with_advance(8.0)
                .with_size(7.0, height)
                .with_baseline(baseline),
        );
    }
    for ch in ['A', 'M', 'V', 'W'] {
        let glyph = Glyph::new(ch)
            .with_advance(10.0)
            .with_size(10.0, 16.0)
            .with_baseline(14.0)
            .with_kerning('V', -1.5)
            .with_kerning('A', -1.5);
        table.insert(family, glyph);
    }
    table.insert(family, Glyph::new(' ').with_advance(4.0));
    table.insert(family, Glyph::new('?').with_advance(8.0).with_size(7.0, 12.0).with_baseline(10.0));
    table
}

fn print_layout(layout: &GlyphLayout<'_, GlyphTable>) {
    for placed in layout.characters() {
        let r = placed.rect;
        println!(
            "   {:?} line={} start={} rect=({:.1}, {:.1}, {:.1}, {:.1})",
            placed.ch, placed.line, placed.line_start, r.left, r.top, r.width, r.height
        );
    }
    let bounds = layout.bounds();
    println!(
        "   lines={} cursor={:.1} bounds=({:.1} x {:.1})",
        layout.line_count(),
        layout.cursor(),
        bounds.width,
        bounds.height
    );
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = LayoutConfig::from_text_config(&RuneConfig::load().text);
    log::info!("laying out with {}", config.font);
    let glyphs = demo_glyphs(config.font.family());

    println!("=== Glyph Layout Demo ===\n");

    println!("1. Single line, baseline grows with ascenders:");
    let mut layout = GlyphLayout::new(&glyphs, config.clone());
    layout.append_text("ace");
    println!("   baseline before 'b': {:?}", layout.current_line_baseline()?);
    layout.append('b');
    println!("   baseline after 'b':  {:?}", layout.current_line_baseline()?);
    print_layout(&layout);
    println!();

    println!("2. Undo restores the previous baseline:");
    layout.remove_last();
    println!("   baseline: {:?}", layout.current_line_baseline()?);
    print_layout(&layout);
    println!();

    println!("3. Two lines with kerning and a substituted glyph:");
    layout.reset();
    layout.layout_text("AVA\nwave~");
    print_layout(&layout);
    println!("   '~' has no glyph and is drawn as {:?}", config.font.fallback_char());
    match layout.current_line_baseline() {
        Ok(baseline) => println!("   baseline: {:?}", baseline),
        Err(err) => println!("   {}", err),
    }
    for index in 0..layout.line_count() {
        println!("   line {} baseline: {:?}", index, layout.baseline_of_line(index));
    }
    println!();

    println!("4. Measuring without keeping a session:");
    let bounds = GlyphLayout::measure(&glyphs, config, "MW\nhello world");
    println!("   bounds=({:.1} x {:.1})", bounds.width, bounds.height);

    Ok(())
}
