//! Frozen open-addressing hash table keyed by byte strings.
//!
//! Layout: `[num_slots u32][num_entries u32][pool_len u32][slots...][string pool]`,
//! each slot `hash u64 | key_off u32 | key_len u16 | value u32`. A zero hash
//! marks an empty slot, so every stored hash has its low bit set.
//!
//! This file is also compiled into `build.rs`, so it must not reach into the
//! rest of the crate.

const FNV_OFFSET: u64 = 0xcbf29ce484222325;
const FNV_PRIME: u64 = 0x100000001b3;

const MAP_HEADER: usize = 12; // 3 × u32
const MAP_SLOT: usize = 18; // u64 + u32 + u16 + u32

#[inline]
pub fn fnv_hash(data: &[u8]) -> u64 {
    let mut h = FNV_OFFSET;
    for &b in data {
        h ^= b as u64;
        h = h.wrapping_mul(FNV_PRIME);
    }
    h | 1
}

/// Hash of `a ++ b` without materializing the concatenation.
#[inline]
pub fn fnv_hash_concat(a: &[u8], b: &[u8]) -> u64 {
    let mut h = FNV_OFFSET;
    for &byte in a.iter().chain(b) {
        h ^= byte as u64;
        h = h.wrapping_mul(FNV_PRIME);
    }
    h | 1
}

pub fn build_map(entries: &[(Vec<u8>, u32)]) -> Vec<u8> {
    let num_entries = entries.len();
    let num_slots = (num_entries * 4).div_ceil(3).next_power_of_two().max(4);
    let mask = num_slots - 1;
    let mut string_pool = Vec::new();
    let mut slots = vec![0u8; num_slots * MAP_SLOT];

    for (key, value) in entries {
        let h = fnv_hash(key);
        let key_off = string_pool.len() as u32;
        let key_len = key.len() as u16;
        string_pool.extend_from_slice(key);

        let mut idx = (h as usize) & mask;
        loop {
            let s = idx * MAP_SLOT;
            if read_u64(&slots, s) == 0 {
                slots[s..s + 8].copy_from_slice(&h.to_le_bytes());
                slots[s + 8..s + 12].copy_from_slice(&key_off.to_le_bytes());
                slots[s + 12..s + 14].copy_from_slice(&key_len.to_le_bytes());
                slots[s + 14..s + 18].copy_from_slice(&value.to_le_bytes());
                break;
            }
            idx = (idx + 1) & mask;
        }
    }

    let mut table = Vec::with_capacity(MAP_HEADER + slots.len() + string_pool.len());
    table.extend_from_slice(&(num_slots as u32).to_le_bytes());
    table.extend_from_slice(&(num_entries as u32).to_le_bytes());
    table.extend_from_slice(&(string_pool.len() as u32).to_le_bytes());
    table.extend_from_slice(&slots);
    table.extend_from_slice(&string_pool);
    table
}

#[inline]
pub fn frozen_map_get(table: &[u8], key: &[u8]) -> Option<u32> {
    let num_slots = read_u32(table, 0) as usize;
    let string_pool_off = MAP_HEADER + num_slots * MAP_SLOT;
    let mask = num_slots - 1; // num_slots is power of 2
    let h = fnv_hash(key);
    let mut idx = (h as usize) & mask;

    loop {
        let slot_off = MAP_HEADER + idx * MAP_SLOT;
        let slot_hash = read_u64(table, slot_off);
        if slot_hash == 0 {
            return None;
        }
        if slot_hash == h {
            let key_off = read_u32(table, slot_off + 8) as usize;
            let key_len = read_u16(table, slot_off + 12) as usize;
            let stored = &table[string_pool_off + key_off..string_pool_off + key_off + key_len];
            if stored == key {
                return Some(read_u32(table, slot_off + 14));
            }
        }
        idx = (idx + 1) & mask;
    }
}

/// Looks up the concatenation `left ++ right`.
#[inline]
pub fn frozen_map_get_concat(table: &[u8], left: &[u8], right: &[u8]) -> Option<u32> {
    let num_slots = read_u32(table, 0) as usize;
    let string_pool_off = MAP_HEADER + num_slots * MAP_SLOT;
    let mask = num_slots - 1;
    let h = fnv_hash_concat(left, right);
    let mut idx = (h as usize) & mask;
    let expected_len = left.len() + right.len();

    loop {
        let slot_off = MAP_HEADER + idx * MAP_SLOT;
        let slot_hash = read_u64(table, slot_off);
        if slot_hash == 0 {
            return None;
        }
        if slot_hash == h {
            let key_off = read_u32(table, slot_off + 8) as usize;
            let key_len = read_u16(table, slot_off + 12) as usize;
            if key_len == expected_len {
                let stored = &table[string_pool_off + key_off..string_pool_off + key_off + key_len];
                if stored[..left.len()] == *left && stored[left.len()..] == *right {
                    return Some(read_u32(table, slot_off + 14));
                }
            }
        }
        idx = (idx + 1) & mask;
    }
}

/// Every stored entry as `(key_start, key_end, value)`, with key offsets
/// relative to the start of `table`.
pub fn frozen_map_entries(table: &[u8]) -> Vec<(usize, usize, u32)> {
    let num_slots = read_u32(table, 0) as usize;
    let num_entries = read_u32(table, 4) as usize;
    let string_pool_off = MAP_HEADER + num_slots * MAP_SLOT;

    let mut entries = Vec::with_capacity(num_entries);
    for idx in 0..num_slots {
        let slot_off = MAP_HEADER + idx * MAP_SLOT;
        if read_u64(table, slot_off) == 0 {
            continue;
        }
        let start = string_pool_off + read_u32(table, slot_off + 8) as usize;
        let len = read_u16(table, slot_off + 12) as usize;
        entries.push((start, start + len, read_u32(table, slot_off + 14)));
    }
    entries
}

#[inline(always)]
pub fn read_u32(data: &[u8], off: usize) -> u32 {
    u32::from_le_bytes([data[off], data[off + 1], data[off + 2], data[off + 3]])
}

#[inline(always)]
pub fn read_u16(data: &[u8], off: usize) -> u16 {
    u16::from_le_bytes([data[off], data[off + 1]])
}

#[inline(always)]
pub fn read_u64(data: &[u8], off: usize) -> u64 {
    let mut buf = [0u8; 8];
    buf.copy_from_slice(&data[off..off + 8]);
    u64::from_le_bytes(buf)
}
