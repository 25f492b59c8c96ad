//! Naming facades over the single operation bridge
//!
//! Two binding generations expose the same operations under different
//! names: [`crypto_cpp`] (`getPublicKey`) and [`starknet_curve`]
//! (`get_public_key`, plus the hash chain and deterministic signing). Both
//! carry signatures as `r || w` with `w = s^-1 mod n`; converting to `s` is
//! left to the caller ([`invert_mod_order`](crate::invert_mod_order)).
//! [`poseidon`] exposes the permutation. All of them delegate to one
//! [`OperationBridge`](crate::OperationBridge) backed by `starknet-crypto`.

pub mod crypto_cpp;
pub mod poseidon;
pub mod starknet_curve;

use crate::bridge::OperationBridge;

pub(crate) const BRIDGE: OperationBridge = OperationBridge::new();
