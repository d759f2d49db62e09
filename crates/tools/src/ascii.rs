//! Text renderer built on the presentation seam.

use dungeon::{
    Cell, Dungeon, Pos, PresentationAdapter, TileVisual, WorldLayout, WorldPos, present,
};

pub struct AsciiAdapter {
    size: usize,
    glyphs: Vec<char>,
}

impl AsciiAdapter {
    pub fn new(size: usize) -> Self {
        Self { size, glyphs: vec![' '; size * size] }
    }

    fn put(&mut self, pos: Pos, glyph: char) {
        if pos.x < 0 || pos.y < 0 {
            return;
        }
        let (x, y) = (pos.x as usize, pos.y as usize);
        if x < self.size && y < self.size {
            self.glyphs[x * self.size + y] = glyph;
        }
    }

    /// One line per grid row.
    pub fn into_string(self) -> String {
        self.glyphs
            .chunks(self.size.max(1))
            .map(|row| row.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl PresentationAdapter for AsciiAdapter {
    fn draw_tile(&mut self, cell: &Cell, visual: TileVisual, _world: WorldPos) {
        let glyph = match visual {
            TileVisual::Wall => '#',
            TileVisual::Floor => '.',
            TileVisual::Door => '>',
        };
        self.put(cell.pos(), glyph);
    }

    fn place_player(&mut self, pos: Pos, _world: WorldPos) {
        self.put(pos, '@');
    }

    fn place_guard(&mut self, _index: usize, pos: Pos, _world: WorldPos) {
        self.put(pos, 'g');
    }
}

pub fn render_ascii(dungeon: &Dungeon, layout: &WorldLayout) -> String {
    let mut adapter = AsciiAdapter::new(dungeon.size());
    present(dungeon, layout, &mut adapter);
    adapter.into_string()
}
