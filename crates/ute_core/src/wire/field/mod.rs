use std::fmt;

/// Closed set of value categories a field can declare.
///
/// The discriminant is the wire category stored in the top three bits of
/// every tag byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum FieldType {
	/// Tag only, no payload.
	Null = 0,
	/// Tag with inline truth bit.
	Bool = 1,
	/// Unsigned varint.
	Int = 2,
	/// Varint length plus raw bytes.
	String = 3,
	/// Varint count plus elements.
	List = 4,
	/// Varint child count plus children in schema order.
	Struct = 5,
}

impl FieldType {
	/// All types in category order.
	pub const ALL: [FieldType; 6] = [Self::Null, Self::Bool, Self::Int, Self::String, Self::List, Self::Struct];

	/// Bit carrying the value of a bool tag.
	pub const BOOL_TRUE_BIT: u8 = 0x10;

	/// Resolve a schema type name.
	pub fn from_name(name: &str) -> Option<Self> {
		Some(match name {
			"null" => Self::Null,
			"bool" => Self::Bool,
			"int" => Self::Int,
			"string" => Self::String,
			"list" => Self::List,
			"struct" => Self::Struct,
			_ => return None,
		})
	}

	/// Schema type name.
	pub fn name(self) -> &'static str {
		match self {
			Self::Null => "null",
			Self::Bool => "bool",
			Self::Int => "int",
			Self::String => "string",
			Self::List => "list",
			Self::Struct => "struct",
		}
	}

	/// Wire category, `0..=5`.
	pub fn category(self) -> u8 {
		self as u8
	}

	/// Tag byte with no inline payload.
	pub fn tag(self) -> u8 {
		self.category() << 5
	}

	/// Resolve a wire category; 6 and 7 are unassigned.
	pub fn from_category(category: u8) -> Option<Self> {
		Self::ALL.get(usize::from(category)).copied()
	}

	/// Split a tag byte into its category.
	pub fn category_of(tag: u8) -> u8 {
		tag >> 5
	}
}

impl fmt::Display for FieldType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// Compiled field descriptor driving encode and decode.
///
/// `elem` is only meaningful for [`FieldType::List`] and `fields` only for
/// [`FieldType::Struct`]; the codec ignores them on other types. Children are
/// owned exclusively, so a compiled tree can never be cyclic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedField {
	/// Field name used to key the value tree. Empty for list elements.
	pub name: Box<str>,
	/// Declared type.
	pub field_type: FieldType,
	/// Element schema of a list.
	pub elem: Option<Box<ParsedField>>,
	/// Children of a struct in wire order.
	pub fields: Vec<ParsedField>,
}

impl ParsedField {
	/// Scalar or childless field.
	pub fn new(name: impl Into<Box<str>>, field_type: FieldType) -> Self {
		Self {
			name: name.into(),
			field_type,
			elem: None,
			fields: Vec::new(),
		}
	}

	/// List field, optionally with an element schema.
	pub fn list(name: impl Into<Box<str>>, elem: Option<ParsedField>) -> Self {
		Self {
			elem: elem.map(Box::new),
			..Self::new(name, FieldType::List)
		}
	}

	/// Struct field with ordered children.
	pub fn structure(name: impl Into<Box<str>>, fields: Vec<ParsedField>) -> Self {
		Self {
			fields,
			..Self::new(name, FieldType::Struct)
		}
	}

	/// Nesting depth; a scalar is 1.
	pub fn depth(&self) -> usize {
		let nested = match self.field_type {
			FieldType::List => self.elem.as_deref().map_or(0, Self::depth),
			FieldType::Struct => self.fields.iter().map(Self::depth).max().unwrap_or(0),
			_ => 0,
		};
		nested + 1
	}
}

#[cfg(test)]
mod tests;
