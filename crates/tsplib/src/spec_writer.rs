use std::{
    fmt::{Display, Formatter},
    ops::{Deref, DerefMut},
};

pub(crate) struct SpecWriter<'a, 'b>(&'a mut Formatter<'b>);

impl<'a, 'b> Deref for SpecWriter<'a, 'b> {
    type Target = Formatter<'b>;

    fn deref(&self) -> &Self::Target {
        self.0
    }
}

impl<'a, 'b> DerefMut for SpecWriter<'a, 'b> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.0
    }
}

impl<'a, 'b> SpecWriter<'a, 'b> {
    pub(crate) fn new(f: &'a mut Formatter<'b>) -> Self {
        Self(f)
    }

    pub(crate) fn line<T: Display>(&mut self, value: T) -> std::fmt::Result {
        writeln!(self, "{value}")
    }

    pub(crate) fn kv_colon<T: Display>(&mut self, key: T, value: impl Display) -> std::fmt::Result {
        writeln!(self, "{key}: {value}")
    }

    pub(crate) fn opt_kv_colon<T: Display>(
        &mut self,
        key: T,
        value: Option<impl Display>,
    ) -> std::fmt::Result {
        if let Some(value) = value {
            self.kv_colon(key, value)?;
        }
        Ok(())
    }

    /// Writes `values` space-separated on one line.
    pub(crate) fn row<T: Display>(&mut self, values: impl IntoIterator<Item = T>) -> std::fmt::Result {
        let mut first = true;
        for value in values {
            if !first {
                self.write_str(" ")?;
            }
            write!(self, "{value}")?;
            first = false;
        }
        self.write_str("\n")
    }
}
