///
/// Parameter Binding
///
/// `Bind` is shared by `Command` and `Query`. Positional indexes are
/// 1-based as in SQLite; names include their prefix (`:name`, `@name`,
/// `$name`). Values are converted to owned `Value`s up front so a command
/// can replay them on every statement of a multi-statement text.
///

use rusqlite::Statement;
use rusqlite::types::{ToSql, ToSqlOutput, Value};

use crate::errors::DbError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot {
    Index(usize),
    Name(String),
}

pub trait Bind {
    fn bind_value(&mut self, slot: Slot, value: Value) -> Result<(), DbError>;

    fn bind<T: ToSql>(&mut self, index: usize, value: T) -> Result<(), DbError> {
        self.bind_value(Slot::Index(index), to_value(&value)?)
    }

    fn bind_named<T: ToSql>(&mut self, name: &str, value: T) -> Result<(), DbError> {
        self.bind_value(Slot::Name(name.to_string()), to_value(&value)?)
    }

    fn bind_null(&mut self, index: usize) -> Result<(), DbError> {
        self.bind_value(Slot::Index(index), Value::Null)
    }

    /// Chained positional binding starting at parameter 1.
    fn binder(&mut self) -> Binder<'_, Self>
    where
        Self: Sized,
    {
        Binder { target: self, index: 1 }
    }
}

pub struct Binder<'b, B> {
    target: &'b mut B,
    index: usize,
}

impl<B: Bind> Binder<'_, B> {
    /// Binds the next positional parameter.
    pub fn arg<T: ToSql>(&mut self, value: T) -> Result<&mut Self, DbError> {
        self.target.bind(self.index, value)?;
        self.index += 1;
        Ok(self)
    }

    /// Leaves the next positional parameter as it is.
    pub fn skip(&mut self) -> &mut Self {
        self.index += 1;
        self
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

pub(crate) fn to_value<T: ToSql + ?Sized>(value: &T) -> Result<Value, DbError> {
    match value.to_sql()? {
        ToSqlOutput::Borrowed(borrowed) => Ok(borrowed.into()),
        ToSqlOutput::Owned(owned) => Ok(owned),
        _ => Err(DbError::UnsupportedValue),
    }
}

/// Binds `value` to `slot`, failing on a name the statement lacks.
pub(crate) fn bind_strict(stmt: &mut Statement<'_>, slot: &Slot, value: &Value) -> Result<(), DbError> {
    let index = match slot {
        Slot::Index(index) => *index,
        Slot::Name(name) => stmt
            .parameter_index(name)?
            .ok_or_else(|| DbError::UnknownParameter(name.clone()))?,
    };
    stmt.raw_bind_parameter(index, value)?;
    Ok(())
}

/// Binds `value` to `slot` when the statement has that parameter.
pub(crate) fn bind_lenient(stmt: &mut Statement<'_>, slot: &Slot, value: &Value) -> Result<(), DbError> {
    let index = match slot {
        Slot::Index(index) if *index <= stmt.parameter_count() => Some(*index),
        Slot::Index(_) => None,
        Slot::Name(name) => stmt.parameter_index(name)?,
    };
    if let Some(index) = index {
        stmt.raw_bind_parameter(index, value)?;
    }
    Ok(())
}
