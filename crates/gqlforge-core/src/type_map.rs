//! Column type → scalar category.

use crate::metadata::{HostPrimitive, RawColumnType};
use crate::model::ScalarType;

/// Map a raw column type onto the scalar category used by every renderer.
///
/// Tokens are compared exactly as the ORM reports them. Anything unrecognized is
/// treated as a string.
pub fn map_column_type(raw: &RawColumnType) -> ScalarType {
    match raw {
        RawColumnType::Primitive { primitive } => match primitive {
            HostPrimitive::String => ScalarType::String,
            HostPrimitive::Number => ScalarType::Number,
            HostPrimitive::Date => ScalarType::Date,
            HostPrimitive::Boolean => ScalarType::Boolean,
        },
        RawColumnType::Named(token) => map_token(token),
    }
}

fn map_token(token: &str) -> ScalarType {
    match token {
        "character varying" | "varying character" | "char varying" | "nvarchar"
        | "national varchar" | "character" | "native character" | "varchar" | "char"
        | "nchar" | "national char" | "varchar2" | "nvarchar2" | "alphanum" | "shorttext"
        | "raw" | "binary" | "varbinary" | "tinytext" | "mediumtext" | "text" | "ntext"
        | "citext" | "longtext" | "uuid" | "string" => ScalarType::String,

        "float" | "double" | "dec" | "decimal" | "smalldecimal" | "fixed" | "numeric"
        | "real" | "double precision" | "number" | "tinyint" | "smallint" | "mediumint"
        | "int" | "bigint" | "int2" | "integer" | "int4" | "int8" | "int64"
        | "unsigned big int" | "float4" | "float8" | "smallmoney" | "money" | "long" => {
            ScalarType::Number
        }

        "datetime" | "datetime2" | "datetimeoffset" | "time" | "time with time zone"
        | "time without time zone" | "timestamp" | "timestamp without time zone"
        | "timestamp with time zone" | "timestamp with local time zone" | "timetz"
        | "timestamptz" | "smalldatetime" | "date" | "interval year to month"
        | "interval day to second" | "interval" => ScalarType::Date,

        "boolean" | "bool" => ScalarType::Boolean,

        _ => ScalarType::String,
    }
}
