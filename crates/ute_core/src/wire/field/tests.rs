use crate::wire::{FieldType, ParsedField};

#[test]
fn names_round_trip_through_from_name() {
	for ty in FieldType::ALL {
		assert_eq!(FieldType::from_name(ty.name()), Some(ty));
	}
	assert_eq!(FieldType::from_name("float"), None);
	assert_eq!(FieldType::from_name("Int"), None);
}

#[test]
fn tags_occupy_top_three_bits() {
	assert_eq!(FieldType::Null.tag(), 0x00);
	assert_eq!(FieldType::Bool.tag(), 0x20);
	assert_eq!(FieldType::Int.tag(), 0x40);
	assert_eq!(FieldType::String.tag(), 0x60);
	assert_eq!(FieldType::List.tag(), 0x80);
	assert_eq!(FieldType::Struct.tag(), 0xa0);
	assert_eq!(FieldType::category_of(0x30), 1);
}

#[test]
fn unassigned_categories_do_not_resolve() {
	assert_eq!(FieldType::from_category(5), Some(FieldType::Struct));
	assert_eq!(FieldType::from_category(6), None);
	assert_eq!(FieldType::from_category(7), None);
}

#[test]
fn depth_counts_nested_levels() {
	let leaf = ParsedField::new("id", FieldType::Int);
	assert_eq!(leaf.depth(), 1);

	let device = ParsedField::structure("", vec![leaf.clone(), ParsedField::new("name", FieldType::String)]);
	let devices = ParsedField::list("devices", Some(device));
	assert_eq!(devices.depth(), 3);

	assert_eq!(ParsedField::list("empty", None).depth(), 1);
	assert_eq!(ParsedField::structure("unit", Vec::new()).depth(), 1);
}
