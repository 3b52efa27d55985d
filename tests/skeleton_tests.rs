//! Skeleton Tests
//!
//! Tests for:
//! - BoneTable: first-seen id assignment, stable lookup, bone limit
//! - VertexBoneData: slot filling, capacity, raw weights
//! - VertexSkinWeights: per-vertex influences and GPU byte layout

use glam::{Mat4, Vec3};

use skelanim::errors::AnimationError;
use skelanim::settings::{MAX_BONES, MAX_BONES_PER_VERTEX};
use skelanim::skeleton::{BoneTable, VertexBoneData, VertexSkinWeights};

// ============================================================================
// BoneTable
// ============================================================================

#[test]
fn bone_ids_follow_first_seen_order() {
    let mut bones = BoneTable::default();

    assert_eq!(bones.get_or_create_bone_id("hip", Mat4::IDENTITY).unwrap(), 0);
    assert_eq!(bones.get_or_create_bone_id("spine", Mat4::IDENTITY).unwrap(), 1);
    assert_eq!(bones.get_or_create_bone_id("hip", Mat4::IDENTITY).unwrap(), 0);
    assert_eq!(bones.get_or_create_bone_id("head", Mat4::IDENTITY).unwrap(), 2);

    assert_eq!(bones.len(), 3);
    assert_eq!(bones.names(), ["hip", "spine", "head"]);
    assert_eq!(bones.bone_id("spine"), Some(1));
    assert_eq!(bones.bone_id("tail"), None);
}

#[test]
fn bone_ids_are_stable_across_tables() {
    let sequence = ["hip", "spine", "hip", "l_thigh", "spine", "r_thigh"];

    let build = || {
        let mut bones = BoneTable::default();
        let ids: Vec<u32> = sequence
            .iter()
            .map(|name| bones.get_or_create_bone_id(name, Mat4::IDENTITY).unwrap())
            .collect();
        (ids, bones)
    };

    let (ids_a, bones_a) = build();
    let (ids_b, bones_b) = build();
    assert_eq!(ids_a, ids_b);
    assert_eq!(bones_a.names(), bones_b.names());
}

#[test]
fn repeated_bone_keeps_first_offset() {
    let mut bones = BoneTable::default();
    let first = Mat4::from_translation(Vec3::X);
    let id = bones.get_or_create_bone_id("hip", first).unwrap();
    bones
        .get_or_create_bone_id("hip", Mat4::from_translation(Vec3::Y))
        .unwrap();

    assert_eq!(bones.offset_matrix(id), first);
}

#[test]
fn new_bone_starts_with_zero_final_transform() {
    let mut bones = BoneTable::default();
    let id = bones.get_or_create_bone_id("hip", Mat4::IDENTITY).unwrap();

    assert_eq!(bones.get(id).unwrap().final_transform, Mat4::ZERO);
    assert_eq!(bones.final_transforms(), vec![Mat4::ZERO]);
}

#[test]
fn bone_table_rejects_bones_past_limit() {
    let mut bones = BoneTable::new(2);
    bones.get_or_create_bone_id("a", Mat4::IDENTITY).unwrap();
    bones.get_or_create_bone_id("b", Mat4::IDENTITY).unwrap();

    let err = bones.get_or_create_bone_id("c", Mat4::IDENTITY).unwrap_err();
    assert_eq!(err, AnimationError::BoneLimitExceeded { count: 3, max: 2 });
    assert_eq!(bones.len(), 2);

    // Known names still resolve at the limit
    assert_eq!(bones.get_or_create_bone_id("a", Mat4::IDENTITY).unwrap(), 0);
}

#[test]
fn default_bone_table_uses_global_limit() {
    assert_eq!(BoneTable::default().max_bones(), MAX_BONES);
}

// ============================================================================
// VertexBoneData
// ============================================================================

#[test]
fn vertex_bone_data_fills_first_free_slot() {
    let mut data = VertexBoneData::default();

    assert_eq!(data.add_bone_data(7, 0.5), Some(0));
    assert_eq!(data.add_bone_data(3, 0.25), Some(1));
    assert_eq!(data.influence_count(), 2);
    assert_eq!(data.influences().collect::<Vec<_>>(), vec![(7, 0.5), (3, 0.25)]);
}

#[test]
fn vertex_bone_data_zero_weight_leaves_slot_free() {
    let mut data = VertexBoneData::default();

    assert_eq!(data.add_bone_data(7, 0.0), Some(0));
    // The zero-weight slot is taken over by the next influence
    assert_eq!(data.add_bone_data(3, 0.5), Some(0));
    assert_eq!(data.bone_ids[0], 3);
    assert_eq!(data.influence_count(), 1);
}

#[test]
fn vertex_bone_data_full_returns_none() {
    let mut data = VertexBoneData::default();
    for bone in 0..MAX_BONES_PER_VERTEX as u32 {
        assert!(data.add_bone_data(bone, 0.25).is_some());
    }

    assert_eq!(data.add_bone_data(99, 0.1), None);
    assert!(!data.bone_ids.contains(&99));
}

#[test]
fn vertex_bone_data_weights_are_not_normalized() {
    let mut data = VertexBoneData::default();
    data.add_bone_data(0, 0.2);
    data.add_bone_data(1, 0.2);

    assert!((data.weight_sum() - 0.4).abs() < 1e-6);
}

// ============================================================================
// VertexSkinWeights
// ============================================================================

#[test]
fn skin_weights_fifth_influence_fails() {
    let mut skin = VertexSkinWeights::new(2);
    for bone in 0..4 {
        skin.add_influence(1, bone, 0.25).unwrap();
    }

    let err = skin.add_influence(1, 4, 0.1).unwrap_err();
    assert_eq!(
        err,
        AnimationError::TooManyInfluences {
            vertex: 1,
            bone: 4,
            capacity: MAX_BONES_PER_VERTEX,
        }
    );

    // Other vertices are unaffected
    skin.add_influence(0, 4, 1.0).unwrap();
    assert_eq!(skin.get(0).unwrap().influence_count(), 1);
}

#[test]
fn skin_weights_vertex_out_of_range() {
    let mut skin = VertexSkinWeights::new(3);

    let err = skin.add_influence(3, 0, 1.0).unwrap_err();
    assert_eq!(err, AnimationError::VertexIndexOutOfRange { vertex: 3, count: 3 });
}

#[test]
fn skin_weights_byte_layout() {
    let mut skin = VertexSkinWeights::new(2);
    skin.add_influence(1, 5, 1.0).unwrap();

    // Four u32 ids followed by four f32 weights per vertex
    assert_eq!(std::mem::size_of::<VertexBoneData>(), 32);
    let bytes = skin.as_bytes();
    assert_eq!(bytes.len(), 64);
    assert_eq!(&bytes[32..36], &5u32.to_ne_bytes());
    assert_eq!(&bytes[48..52], &1.0f32.to_ne_bytes());
}
