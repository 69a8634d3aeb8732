use std::{
    fmt::{Display, Formatter},
    ops::{Deref, DerefMut},
};

const RULE_WIDTH: usize = 35;

/// Line-oriented helper over a `Formatter`, shared by the report `Display` impls.
pub(crate) struct ReportWriter<'a, 'b>(&'a mut Formatter<'b>);

impl<'a, 'b> Deref for ReportWriter<'a, 'b> {
    type Target = Formatter<'b>;

    fn deref(&self) -> &Self::Target {
        self.0
    }
}

impl<'a, 'b> DerefMut for ReportWriter<'a, 'b> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.0
    }
}

impl<'a, 'b> ReportWriter<'a, 'b> {
    pub(crate) fn new(f: &'a mut Formatter<'b>) -> Self {
        Self(f)
    }

    pub(crate) fn line<T: Display>(&mut self, value: T) -> std::fmt::Result {
        writeln!(self, "{value}")
    }

    pub(crate) fn blank(&mut self) -> std::fmt::Result {
        writeln!(self)
    }

    pub(crate) fn rule(&mut self) -> std::fmt::Result {
        writeln!(self, "{}", "-".repeat(RULE_WIDTH))
    }

    pub(crate) fn kv_colon<T: Display>(&mut self, key: &str, value: T) -> std::fmt::Result {
        writeln!(self, "{key}: {value}")
    }

    /// Writes `values` separated by single spaces, then a newline.
    pub(crate) fn row<T: Display>(
        &mut self,
        values: impl IntoIterator<Item = T>,
    ) -> std::fmt::Result {
        let mut values = values.into_iter();
        if let Some(first) = values.next() {
            write!(self, "{first}")?;
            for value in values {
                write!(self, " {value}")?;
            }
        }
        self.blank()
    }

    /// Like [`row`](Self::row) but wrapped in brackets: `[1 2 3]`.
    pub(crate) fn bracketed<T: Display>(
        &mut self,
        values: impl IntoIterator<Item = T>,
    ) -> std::fmt::Result {
        write!(self, "[")?;
        let mut values = values.into_iter();
        if let Some(first) = values.next() {
            write!(self, "{first}")?;
            for value in values {
                write!(self, " {value}")?;
            }
        }
        writeln!(self, "]")
    }
}

#[cfg(test)]
mod tests {
    use std::fmt;

    use super::ReportWriter;

    struct Sample(Vec<usize>);

    impl fmt::Display for Sample {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let mut w = ReportWriter::new(f);
            w.kv_colon("Count", self.0.len())?;
            w.row(&self.0)?;
            w.bracketed(&self.0)?;
            w.rule()
        }
    }

    #[test]
    fn writer_helpers_compose_lines() {
        let text = Sample(vec![1, 2, 3]).to_string();
        assert_eq!(
            text,
            format!("Count: 3\n1 2 3\n[1 2 3]\n{}\n", "-".repeat(35))
        );
    }

    #[test]
    fn empty_rows_are_bare_newlines() {
        let text = Sample(vec![]).to_string();
        assert!(text.starts_with("Count: 0\n\n[]\n"));
    }
}
