//! D-Bus proxy interfaces for NetworkManager.
//!
//! This module contains low-level D-Bus proxy definitions for reading the
//! active access point over the system bus. Only the properties the reader
//! needs are declared.
//!
//! # NetworkManager D-Bus Structure
//!
//! - `/org/freedesktop/NetworkManager` - Main NM object
//! - `/org/freedesktop/NetworkManager/Devices/*` - Device objects
//! - `/org/freedesktop/NetworkManager/AccessPoint/*` - Access point objects

mod access_point;
mod device;
mod main_nm;
mod wireless;

pub(crate) use access_point::NMAccessPointProxy;
pub(crate) use device::NMDeviceProxy;
pub(crate) use main_nm::NMProxy;
pub(crate) use wireless::NMWirelessProxy;
