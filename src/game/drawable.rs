use super::{apple::Apple, grid::Cell, snake::Snake};

/// What a cell should look like, without saying how to draw it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisualTag {
    SnakeHead,
    SnakeBody,
    Apple,
}

/// Something that occupies cells and can be painted by a renderer
pub trait Drawable {
    /// Occupied cells paired with how each should look
    fn tagged_cells(&self) -> Vec<(Cell, VisualTag)>;
}

impl Drawable for Snake {
    fn tagged_cells(&self) -> Vec<(Cell, VisualTag)> {
        self.body_snapshot()
            .iter()
            .enumerate()
            .map(|(i, &cell)| {
                let tag = if i == 0 {
                    VisualTag::SnakeHead
                } else {
                    VisualTag::SnakeBody
                };
                (cell, tag)
            })
            .collect()
    }
}

impl Drawable for Apple {
    fn tagged_cells(&self) -> Vec<(Cell, VisualTag)> {
        vec![(self.position(), VisualTag::Apple)]
    }
}
