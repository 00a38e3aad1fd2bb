///
/// Materialized Rows
///
/// A `Row` owns its values, so rows outlive the statement that produced
/// them and can flow through any qolor adaptor. Column names are shared
/// between all rows of one query.
///

use std::sync::Arc;

use rusqlite::types::{FromSql, Type, Value, ValueRef};

use crate::errors::DbError;

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    columns: Arc<[String]>,
    values: Vec<Value>,
}

impl Row {
    pub fn new(columns: Arc<[String]>, values: Vec<Value>) -> Self {
        Row { columns, values }
    }

    pub fn column_count(&self) -> usize {
        self.values.len()
    }

    pub fn column_name(&self, column: usize) -> Option<&str> {
        self.columns.get(column).map(String::as_str)
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn column_type(&self, column: usize) -> Option<Type> {
        self.values.get(column).map(Value::data_type)
    }

    pub fn value(&self, column: usize) -> Option<&Value> {
        self.values.get(column)
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn into_values(self) -> Vec<Value> {
        self.values
    }

    pub fn get<T: FromSql>(&self, column: usize) -> Result<T, DbError> {
        let value = self.values.get(column).ok_or(DbError::ColumnOutOfRange {
            column,
            count: self.values.len(),
        })?;
        T::column_result(ValueRef::from(value))
            .map_err(|e| DbError::Conversion { column, reason: e.to_string() })
    }

    /// Reads several columns at once into a tuple.
    pub fn get_columns<T: FromColumns>(&self, columns: &[usize]) -> Result<T, DbError> {
        T::from_columns(self, columns)
    }

    /// Sequential reads starting at column `start`.
    pub fn getter(&self, start: usize) -> RowReader<'_> {
        RowReader { row: self, column: start }
    }
}

pub trait FromColumns: Sized {
    const WIDTH: usize;

    fn from_columns(row: &Row, columns: &[usize]) -> Result<Self, DbError>;
}

macro_rules! from_columns_tuple {
    ($width:literal; $($name:ident $idx:tt),+) => {
        impl<$($name: FromSql),+> FromColumns for ($($name,)+) {
            const WIDTH: usize = $width;

            fn from_columns(row: &Row, columns: &[usize]) -> Result<Self, DbError> {
                if columns.len() != $width {
                    return Err(DbError::ColumnCount { expected: $width, found: columns.len() });
                }
                Ok(($(row.get::<$name>(columns[$idx])?,)+))
            }
        }
    };
}

from_columns_tuple!(1; A 0);
from_columns_tuple!(2; A 0, B 1);
from_columns_tuple!(3; A 0, B 1, C 2);
from_columns_tuple!(4; A 0, B 1, C 2, D 3);
from_columns_tuple!(5; A 0, B 1, C 2, D 3, E 4);
from_columns_tuple!(6; A 0, B 1, C 2, D 3, E 4, F 5);

/// Reads the columns of one row left to right.
pub struct RowReader<'r> {
    row: &'r Row,
    column: usize,
}

impl RowReader<'_> {
    pub fn read<T: FromSql>(&mut self) -> Result<T, DbError> {
        let value = self.row.get(self.column)?;
        self.column += 1;
        Ok(value)
    }

    pub fn skip(&mut self) -> &mut Self {
        self.column += 1;
        self
    }

    pub fn column(&self) -> usize {
        self.column
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact() -> Row {
        let columns: Arc<[String]> = vec!["id".to_string(), "name".to_string(), "phone".to_string()].into();
        Row::new(
            columns,
            vec![Value::Integer(7), Value::Text("AAAA".to_string()), Value::Null],
        )
    }

    #[test]
    fn test_get_typed() {
        let row = contact();
        assert_eq!(row.get::<i32>(0).unwrap(), 7);
        assert_eq!(row.get::<String>(1).unwrap(), "AAAA");
        assert_eq!(row.get::<Option<String>>(2).unwrap(), None);
        assert_eq!(row.column_type(2), Some(Type::Null));
        assert_eq!(row.column_index("phone"), Some(2));
    }

    #[test]
    fn test_get_errors() {
        let row = contact();
        assert!(matches!(row.get::<i64>(3), Err(DbError::ColumnOutOfRange { column: 3, count: 3 })));
        assert!(matches!(row.get::<i64>(1), Err(DbError::Conversion { column: 1, .. })));
    }

    #[test]
    fn test_get_columns_tuple() {
        let row = contact();
        let (id, name): (i64, String) = row.get_columns(&[0, 1]).unwrap();
        assert_eq!((id, name.as_str()), (7, "AAAA"));
        let (name,): (String,) = row.get_columns(&[1]).unwrap();
        assert_eq!(name, "AAAA");
        let err = row.get_columns::<(i64, String)>(&[0]).unwrap_err();
        assert!(matches!(err, DbError::ColumnCount { expected: 2, found: 1 }));
    }

    #[test]
    fn test_getter_skips_columns() {
        let row = contact();
        let mut getter = row.getter(0);
        let name: String = getter.skip().read().unwrap();
        assert_eq!(name, "AAAA");
        assert_eq!(getter.column(), 2);
        let phone: Option<String> = getter.read().unwrap();
        assert!(phone.is_none());
        assert!(getter.read::<String>().is_err());
    }
}
