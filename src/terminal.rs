mod bullet_points;
mod line_writer;

pub use bullet_points::BulletPointPrinter;
pub use line_writer::{LineWriter, StdoutLineWriter};

#[cfg(test)]
pub use line_writer::BufferLineWriter;
