// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! In-memory customer store.
//!
//! Identifiers are assigned sequentially from 1 and never reused, even after
//! a delete. Listing is ordered by identifier.

use std::collections::BTreeMap;

use crate::error::ApiError;
use crate::models::{Customer, CustomerRequest};

pub struct CustomerStore {
    customers: BTreeMap<i64, Customer>,
    next_id: i64,
}

impl Default for CustomerStore {
    fn default() -> Self {
        Self {
            customers: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl CustomerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list(&self) -> Vec<Customer> {
        self.customers.values().cloned().collect()
    }

    pub fn find(&self, id: i64) -> Result<Customer, ApiError> {
        self.customers
            .get(&id)
            .cloned()
            .ok_or_else(ApiError::not_found)
    }

    pub fn insert(&mut self, request: CustomerRequest) -> Customer {
        let id = self.next_id;
        self.next_id += 1;

        let customer = Customer {
            id,
            name: request.name,
            email: request.email,
        };
        self.customers.insert(id, customer.clone());
        customer
    }

    /// Replace name and email of an existing customer.
    pub fn update(&mut self, id: i64, request: CustomerRequest) -> Result<Customer, ApiError> {
        let Some(customer) = self.customers.get_mut(&id) else {
            return Err(ApiError::not_found());
        };

        customer.name = request.name;
        customer.email = request.email;
        Ok(customer.clone())
    }

    pub fn delete(&mut self, id: i64) -> Result<Customer, ApiError> {
        self.customers.remove(&id).ok_or_else(ApiError::not_found)
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn request(name: &str, email: &str) -> CustomerRequest {
        CustomerRequest {
            name: name.into(),
            email: email.into(),
        }
    }

    #[test]
    fn insert_then_find_round_trips() {
        let mut store = CustomerStore::new();
        let created = store.insert(request("Ada", "ada@example.com"));

        let found = store.find(created.id).unwrap();
        assert_eq!(found.name, "Ada");
        assert_eq!(found.email, "ada@example.com");
        assert_eq!(found, created);
    }

    #[test]
    fn ids_are_sequential_and_never_reused() {
        let mut store = CustomerStore::new();
        let first = store.insert(request("A", "a@example.com"));
        let second = store.insert(request("B", "b@example.com"));
        assert_eq!((first.id, second.id), (1, 2));

        store.delete(second.id).unwrap();
        let third = store.insert(request("C", "c@example.com"));
        assert_eq!(third.id, 3);
    }

    #[test]
    fn list_is_ordered_by_id() {
        let mut store = CustomerStore::new();
        for i in 0..5 {
            store.insert(request(&format!("c{i}"), "c@example.com"));
        }
        let ids: Vec<i64> = store.list().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn update_replaces_fields() {
        let mut store = CustomerStore::new();
        let created = store.insert(request("Ada", "ada@example.com"));

        let updated = store
            .update(created.id, request("Ada L.", "ada@lovelace.dev"))
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(store.find(created.id).unwrap(), updated);
    }

    #[test]
    fn missing_ids_are_not_found() {
        let mut store = CustomerStore::new();
        assert_eq!(store.find(7).unwrap_err().status, StatusCode::NOT_FOUND);
        assert_eq!(
            store.update(7, request("A", "a@example.com")).unwrap_err().status,
            StatusCode::NOT_FOUND
        );
        assert_eq!(store.delete(7).unwrap_err().status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn repeated_delete_stays_not_found() {
        let mut store = CustomerStore::new();
        let created = store.insert(request("Ada", "ada@example.com"));

        assert!(store.delete(created.id).is_ok());
        for _ in 0..3 {
            assert_eq!(
                store.delete(created.id).unwrap_err().status,
                StatusCode::NOT_FOUND
            );
        }
        assert!(store.is_empty());
    }
}
