use super::line_writer::LineWriter;

pub struct BulletPointPrinter<'w, W: LineWriter> {
    writer: &'w W,
}

impl<'w, W: LineWriter> BulletPointPrinter<'w, W> {
    pub fn new(writer: &'w W) -> Self {
        Self { writer }
    }

    pub fn print_item(&self, message: impl std::fmt::Display) {
        self.writer.write_line(&format!("• {}", message));
    }
}
