use super::repo::DeleteResult;
use flock_domain::{Entity, ID};
use std::sync::{Mutex, MutexGuard};

// Helpers for the inmemory repositories used in tests.
// A poisoned lock only means another test thread panicked, so the data is
// still used.

fn lock<T>(collection: &Mutex<Vec<T>>) -> MutexGuard<'_, Vec<T>> {
    collection
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

pub fn insert<T: Clone>(val: &T, collection: &Mutex<Vec<T>>) {
    lock(collection).push(val.clone());
}

pub fn insert_many<T: Clone>(vals: &[T], collection: &Mutex<Vec<T>>) {
    lock(collection).extend_from_slice(vals);
}

pub fn save<T: Clone + Entity>(val: &T, collection: &Mutex<Vec<T>>) {
    let mut collection = lock(collection);
    if let Some(existing) = collection.iter_mut().find(|e| e.id() == val.id()) {
        *existing = val.clone();
    }
}

pub fn find<T: Clone + Entity>(val_id: &ID, collection: &Mutex<Vec<T>>) -> Option<T> {
    lock(collection).iter().find(|e| e.id() == val_id).cloned()
}

pub fn find_by<T: Clone, F: FnMut(&T) -> bool>(collection: &Mutex<Vec<T>>, mut compare: F) -> Vec<T> {
    lock(collection)
        .iter()
        .filter(|item| compare(item))
        .cloned()
        .collect()
}

pub fn delete<T: Clone + Entity>(val_id: &ID, collection: &Mutex<Vec<T>>) -> Option<T> {
    let mut collection = lock(collection);
    let index = collection.iter().position(|e| e.id() == val_id)?;
    Some(collection.remove(index))
}

pub fn delete_by<T: Clone, F: Fn(&T) -> bool>(collection: &Mutex<Vec<T>>, compare: F) -> DeleteResult {
    let mut collection = lock(collection);
    let count_before = collection.len();
    collection.retain(|item| !compare(item));
    DeleteResult {
        deleted_count: (count_before - collection.len()) as u64,
    }
}

pub fn update_many<T, F: Fn(&T) -> bool, U: Fn(&mut T)>(
    collection: &Mutex<Vec<T>>,
    compare: F,
    update: U,
) {
    for item in lock(collection).iter_mut() {
        if compare(item) {
            update(item);
        }
    }
}
