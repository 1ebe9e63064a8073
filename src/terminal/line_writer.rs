pub trait LineWriter {
    fn write_line(&self, line: &str);
}

#[derive(Clone, Copy)]
pub struct StdoutLineWriter;
impl LineWriter for StdoutLineWriter {
    fn write_line(&self, line: &str) {
        println!("{}", line);
    }
}

/// Collects lines in memory so tests can assert on command output.
#[cfg(test)]
#[derive(Clone, Default)]
pub struct BufferLineWriter {
    lines: std::rc::Rc<std::cell::RefCell<Vec<String>>>,
}

#[cfg(test)]
impl BufferLineWriter {
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }
}

#[cfg(test)]
impl LineWriter for BufferLineWriter {
    fn write_line(&self, line: &str) {
        self.lines.borrow_mut().push(line.to_string());
    }
}
