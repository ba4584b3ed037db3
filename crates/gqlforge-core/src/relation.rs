use crate::metadata::RelationMetadata;
use crate::model::RelationKind;

/// Canonical view of one relation as reported by the ORM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationDescriptor {
    pub kind: RelationKind,
    pub related_table: String,
    pub related_field: Option<String>,
}

/// Classify a relation from its cardinality flags.
///
/// When more than one flag is set, many-to-many wins over many-to-one, which wins over
/// one-to-many. No flag at all means one-to-one.
pub fn classify_relation(meta: &RelationMetadata) -> RelationDescriptor {
    let kind = match (meta.is_many_to_many, meta.is_many_to_one, meta.is_one_to_many) {
        (true, _, _) => RelationKind::ManyToMany,
        (false, true, _) => RelationKind::ManyToOne,
        (false, false, true) => RelationKind::OneToMany,
        (false, false, false) => RelationKind::OneToOne,
    };

    RelationDescriptor {
        kind,
        related_table: meta.inverse_table_name.clone(),
        related_field: meta.inverse_property_name.clone(),
    }
}
