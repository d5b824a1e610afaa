// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Credential registry
//!
//! Sole writer of the `accessCodes` key. Every mutation holds the registry
//! lock across read, modify and persist, and only commits to memory once
//! the write has landed.

use crate::error::RegistryError;
use af_core::{keys, AccessCode, Clock, CodeBook, CodeGen, CodeStats};
use af_storage::{codec, DurableStore, StoreError};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Fresh draws attempted before `generate` gives up on finding an unused code
pub const MAX_GENERATE_ATTEMPTS: u32 = 32;

/// Issues, validates and redeems access codes
#[derive(Clone)]
pub struct CredentialRegistry<S, C, G> {
    store: S,
    clock: C,
    codegen: G,
    book: Arc<Mutex<CodeBook>>,
    admin: Arc<AtomicBool>,
    admin_password: Option<String>,
}

impl<S, C, G> CredentialRegistry<S, C, G>
where
    S: DurableStore,
    C: Clock,
    G: CodeGen,
{
    pub fn new(store: S, clock: C, codegen: G) -> Self {
        Self {
            store,
            clock,
            codegen,
            book: Arc::new(Mutex::new(CodeBook::new())),
            admin: Arc::new(AtomicBool::new(false)),
            admin_password: None,
        }
    }

    /// Password accepted by `unlock_admin`; without one admin mode can only be set directly
    pub fn with_admin_password(mut self, password: impl Into<String>) -> Self {
        self.admin_password = Some(password.into());
        self
    }

    /// Rehydrate from the store, returning the number of codes held.
    ///
    /// A failed read keeps what is already in memory.
    pub async fn load(&self) -> usize {
        let mut book = self.book.lock().await;
        self.refresh(&mut book).await;
        book.len()
    }

    /// Issue a fresh unused code
    pub async fn generate(&self) -> Result<String, RegistryError> {
        self.require_admin()?;
        let mut book = self.book.lock().await;
        let mut next = self.read_book().await?;

        let code = self.draw_unused(&next)?;
        next.insert(AccessCode::new(code.clone(), self.clock.now()));
        self.persist(&next).await?;
        *book = next;

        tracing::info!(code = %code, total = book.len(), "access code generated");
        Ok(code)
    }

    /// Whether the candidate names an existing, unredeemed code.
    ///
    /// Reloads first so codes issued by another session are seen.
    pub async fn is_valid(&self, candidate: &str) -> bool {
        let mut book = self.book.lock().await;
        self.refresh(&mut book).await;
        book.is_valid(candidate)
    }

    /// Redeem a code for `identifier`, returning its canonical form
    pub async fn redeem(&self, candidate: &str, identifier: &str) -> Result<String, RegistryError> {
        let mut book = self.book.lock().await;
        let mut next = self.read_book().await?;

        let code = match next.redeem(candidate, identifier, self.clock.now()) {
            Ok(code) => code,
            Err(e) => {
                tracing::info!(error = %e, "redemption refused");
                *book = next;
                return Err(e.into());
            }
        };
        self.persist(&next).await?;
        *book = next;

        tracing::info!(code = %code, identifier, "access code redeemed");
        Ok(code)
    }

    /// Remove a code whatever its state. Returns whether it existed.
    pub async fn delete(&self, candidate: &str) -> Result<bool, RegistryError> {
        self.require_admin()?;
        let mut book = self.book.lock().await;
        let mut next = self.read_book().await?;

        if !next.remove(candidate) {
            *book = next;
            return Ok(false);
        }
        self.persist(&next).await?;
        *book = next;

        tracing::info!(candidate, remaining = book.len(), "access code deleted");
        Ok(true)
    }

    /// All codes, available ones first
    pub async fn codes(&self) -> Result<Vec<AccessCode>, RegistryError> {
        self.require_admin()?;
        let mut book = self.book.lock().await;
        self.refresh(&mut book).await;
        Ok(book.listing().into_iter().cloned().collect())
    }

    pub async fn stats(&self) -> Result<CodeStats, RegistryError> {
        self.require_admin()?;
        let mut book = self.book.lock().await;
        self.refresh(&mut book).await;
        Ok(book.stats())
    }

    pub fn set_admin(&self, enabled: bool) {
        self.admin.store(enabled, Ordering::SeqCst);
        tracing::info!(enabled, "admin mode changed");
    }

    pub fn is_admin(&self) -> bool {
        self.admin.load(Ordering::SeqCst)
    }

    /// Enter admin mode if `password` matches the configured one exactly
    pub fn unlock_admin(&self, password: &str) -> bool {
        match &self.admin_password {
            Some(expected) if expected == password => {
                self.set_admin(true);
                true
            }
            Some(_) => {
                tracing::warn!("admin unlock rejected");
                false
            }
            None => {
                tracing::warn!("admin unlock attempted without a configured password");
                false
            }
        }
    }

    fn require_admin(&self) -> Result<(), RegistryError> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(RegistryError::AdminRequired)
        }
    }

    fn draw_unused(&self, book: &CodeBook) -> Result<String, RegistryError> {
        for attempt in 1..=MAX_GENERATE_ATTEMPTS {
            let candidate = self.codegen.next();
            if !book.contains(&candidate) {
                return Ok(candidate);
            }
            tracing::debug!(attempt, candidate = %candidate, "generated code collides, drawing again");
        }
        tracing::error!(attempts = MAX_GENERATE_ATTEMPTS, "could not draw an unused code");
        Err(RegistryError::CodeSpaceExhausted {
            attempts: MAX_GENERATE_ATTEMPTS,
        })
    }

    /// Strict read for mutations: a failed read must not be mistaken for an empty set
    async fn read_book(&self) -> Result<CodeBook, StoreError> {
        let raw = self.store.get(keys::ACCESS_CODES).await?;
        let codes: Vec<AccessCode> = codec::decode_json(keys::ACCESS_CODES, raw.as_deref());
        Ok(CodeBook::from_codes(codes))
    }

    async fn refresh(&self, book: &mut CodeBook) {
        match self.read_book().await {
            Ok(fresh) => *book = fresh,
            Err(e) => tracing::warn!(error = %e, "reload failed, keeping cached codes"),
        }
    }

    async fn persist(&self, book: &CodeBook) -> Result<(), StoreError> {
        let payload = codec::encode_json(&book.codes())?;
        self.store.set(keys::ACCESS_CODES, &payload).await
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
