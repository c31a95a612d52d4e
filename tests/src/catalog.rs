//! Well-known definitions shared by the scenarios.

use attrix_core::{AttributeDefinition, AttributeGroup, DefinitionId, Quantity, StorageKind};

pub const GROUP_GEOMETRY: AttributeGroup = AttributeGroup(1);
pub const GROUP_IDENTITY: AttributeGroup = AttributeGroup(2);
pub const GROUP_CONSTRAINTS: AttributeGroup = AttributeGroup(3);

pub fn width() -> AttributeDefinition {
    AttributeDefinition::well_known(DefinitionId(-1001), "Width", StorageKind::Real)
        .in_group(GROUP_GEOMETRY)
        .with_quantity(Quantity::Length)
}

pub fn height() -> AttributeDefinition {
    AttributeDefinition::well_known(DefinitionId(-1002), "Height", StorageKind::Real)
        .in_group(GROUP_GEOMETRY)
        .with_quantity(Quantity::Length)
}

pub fn area() -> AttributeDefinition {
    AttributeDefinition::well_known(DefinitionId(-1003), "Area", StorageKind::Real)
        .in_group(GROUP_GEOMETRY)
        .with_quantity(Quantity::Area)
}

pub fn comments() -> AttributeDefinition {
    AttributeDefinition::well_known(DefinitionId(-1010), "Comments", StorageKind::Text)
        .in_group(GROUP_IDENTITY)
}

pub fn structural() -> AttributeDefinition {
    AttributeDefinition::well_known(DefinitionId(-1020), "Structural", StorageKind::Integer)
        .in_group(GROUP_CONSTRAINTS)
}

pub fn base_level() -> AttributeDefinition {
    AttributeDefinition::well_known(DefinitionId(-1021), "Base Level", StorageKind::Reference)
        .in_group(GROUP_CONSTRAINTS)
}

/// Every definition above.
pub fn standard() -> Vec<AttributeDefinition> {
    vec![width(), height(), area(), comments(), structural(), base_level()]
}
