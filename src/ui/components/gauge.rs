use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    symbols,
    text::Span,
    widgets::{Block, Widget},
};

/// Single-ratio progress gauge with sub-cell resolution and a centered
/// label overlaying the bar. Ratios outside `0.0..=1.0` are clamped.
#[derive(Debug, Default, Clone)]
pub struct ProgressGauge<'a> {
    block: Option<Block<'a>>,
    ratio: f64,
    label: Option<Span<'a>>,
    filled_style: Style,
    empty_style: Style,
}

impl<'a> ProgressGauge<'a> {
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    pub fn ratio(mut self, ratio: f64) -> Self {
        self.ratio = ratio.clamp(0.0, 1.0);
        self
    }

    pub fn label<T>(mut self, label: T) -> Self
    where
        T: Into<Span<'a>>,
    {
        self.label = Some(label.into());
        self
    }

    pub fn filled_style<S: Into<Style>>(mut self, style: S) -> Self {
        self.filled_style = style.into();
        self
    }

    pub fn empty_style<S: Into<Style>>(mut self, style: S) -> Self {
        self.empty_style = style.into();
        self
    }
}

fn eighth_block(frac: f64) -> &'static str {
    match (frac * 8.0).round() as u16 {
        0 => " ",
        1 => symbols::block::ONE_EIGHTH,
        2 => symbols::block::ONE_QUARTER,
        3 => symbols::block::THREE_EIGHTHS,
        4 => symbols::block::HALF,
        5 => symbols::block::FIVE_EIGHTHS,
        6 => symbols::block::THREE_QUARTERS,
        7 => symbols::block::SEVEN_EIGHTHS,
        _ => symbols::block::FULL,
    }
}

impl Widget for ProgressGauge<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if let Some(ref block) = self.block {
            block.render(area, buf);
        }
        let inner = self.block.as_ref().map_or(area, |b| b.inner(area));
        if inner.is_empty() {
            return;
        }

        let filled = f64::from(inner.width) * self.ratio;
        let label = self.label.unwrap_or_else(|| {
            Span::raw(format!("{}%", (self.ratio * 100.0).round() as u16))
        });
        let label_col = inner.left() + inner.width.saturating_sub(label.width() as u16) / 2;
        let label_row = inner.top() + inner.height / 2;

        for y in inner.top()..inner.bottom() {
            for x in inner.left()..inner.right() {
                let cell = f64::from(x - inner.left());
                let (symbol, style) = if cell + 1.0 <= filled {
                    (symbols::block::FULL, self.filled_style)
                } else if cell < filled {
                    (eighth_block(filled - cell), self.filled_style)
                } else {
                    (" ", self.empty_style)
                };

                buf[(x, y)]
                    .set_symbol(symbol)
                    .set_fg(style.fg.unwrap_or_default())
                    .set_bg(style.bg.unwrap_or_default());
            }
        }

        let in_label = |x: u16| x >= label_col && x < label_col + label.width() as u16;
        for x in inner.left()..inner.right() {
            if in_label(x) {
                buf[(x, label_row)].set_symbol(" ");
            }
        }
        buf.set_span(label_col, label_row, &label, label.width() as u16);
    }
}
