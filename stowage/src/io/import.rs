use std::collections::HashSet;

use anyhow::{Context, Result, ensure};

use crate::entities::{Container, Item};
use crate::geometry::primitives::Point3;
use crate::io::ext_repr::{ExtContainer, ExtEdit, ExtInstance, ExtItem};
use crate::manual::{Edit, Pose};

pub fn import_container(ext_cont: &ExtContainer) -> Result<Container> {
    let ExtContainer {
        width,
        height,
        depth,
    } = *ext_cont;
    for (name, v) in [("width", width), ("height", height), ("depth", depth)] {
        ensure!(
            v.is_finite() && v >= 0.0,
            "container {name} must be finite and non-negative, got {v}"
        );
    }
    Ok(Container::new(width, height, depth))
}

pub fn import_item(ext_item: &ExtItem) -> Result<Item> {
    ensure!(!ext_item.id.is_empty(), "item id must not be empty");
    for (name, v) in [
        ("width", ext_item.width),
        ("height", ext_item.height),
        ("depth", ext_item.depth),
        ("weight", ext_item.weight),
    ] {
        ensure!(
            v.is_finite() && v >= 0.0,
            "{name} of item {} must be finite and non-negative, got {v}",
            ext_item.id
        );
    }

    let mut item = Item::new(
        ext_item.id.clone(),
        ext_item.width,
        ext_item.height,
        ext_item.depth,
    )
    .with_weight(ext_item.weight)
    .with_stackable(ext_item.stackable)
    .with_rotatable(ext_item.rotatable)
    .with_must_stack(ext_item.must_stack)
    .with_self_stack_only(ext_item.self_stack_only);

    if let Some(type_key) = &ext_item.type_key {
        item = item.with_type_key(type_key.clone());
    }
    Ok(item)
}

/// Imports all items, rejecting duplicate ids
pub fn import_items(ext_items: &[ExtItem]) -> Result<Vec<Item>> {
    let mut seen = HashSet::new();
    ext_items
        .iter()
        .map(|ext_item| {
            ensure!(
                seen.insert(ext_item.id.as_str()),
                "duplicate item id {}",
                ext_item.id
            );
            import_item(ext_item)
        })
        .collect()
}

pub fn import_instance(ext_instance: &ExtInstance) -> Result<(Container, Vec<Item>)> {
    let container = import_container(&ext_instance.container)
        .with_context(|| format!("invalid container in instance {}", ext_instance.name))?;
    let items = import_items(&ext_instance.items)
        .with_context(|| format!("invalid items in instance {}", ext_instance.name))?;
    Ok((container, items))
}

pub fn import_edit(ext_edit: &ExtEdit) -> Result<Edit> {
    ensure!(
        ext_edit.center.iter().chain(&ext_edit.rotation).all(|v| v.is_finite()),
        "edit of {} has a non-finite pose",
        ext_edit.placement_id
    );
    if let Some(snap) = ext_edit.snap {
        ensure!(
            snap.is_finite() && snap >= 0.0,
            "edit of {} has an invalid snap size {snap}",
            ext_edit.placement_id
        );
    }
    let [cx, cy, cz] = ext_edit.center;
    let [roll, pitch, yaw] = ext_edit.rotation;
    Ok(Edit {
        placement_id: ext_edit.placement_id.clone(),
        pose: Pose::new(Point3(cx, cy, cz)).with_rotation(roll, pitch, yaw),
        mode: ext_edit.mode,
        snap: ext_edit.snap,
    })
}

pub fn import_edits(ext_edits: &[ExtEdit]) -> Result<Vec<Edit>> {
    ext_edits.iter().map(import_edit).collect()
}
