//! Resolution result model.
//!
//! A [`ModuleDescriptor`] is the opaque handle a successful resolution hands
//! back: enough to load and apply the plugin, without this crate knowing how
//! loading works. A [`PluginResolution`] pairs a descriptor with an optional
//! [`CompatibilityWarning`] attached by a strategy that matched despite a
//! version mismatch.

use crate::request::PluginId ;



/// Opaque handle to a loadable plugin implementation.
///
/// Carries the plugin id, the implementation module coordinates, and the
/// version the descriptor was resolved at (`None` for plugins versioned with
/// the engine itself).
#[derive( Clone, Debug, Eq, Hash, PartialEq )]
pub struct ModuleDescriptor {
	id: PluginId,
	module: String,
	version: Option<String>,
}

impl ModuleDescriptor {

	/// Creates a descriptor for a plugin bundled with the engine.
	pub fn bundled( id: PluginId, module: impl Into<String> ) -> Self {
		Self { id, module: module.into(), version: None }
	}

	/// Creates a descriptor for an independently versioned plugin artifact.
	pub fn versioned( id: PluginId, module: impl Into<String>, version: impl Into<String> ) -> Self {
		Self { id, module: module.into(), version: Some( version.into() )}
	}

	/// Returns the plugin id this descriptor implements.
	#[inline] pub fn id( &self ) -> &PluginId { &self.id }
	/// Returns the implementation module coordinates.
	#[inline] pub fn module( &self ) -> &str { &self.module }
	/// Returns the resolved version, or `None` for engine-bundled plugins.
	#[inline] pub fn version( &self ) -> Option<&str> { self.version.as_deref() }

}

impl std::fmt::Display for ModuleDescriptor {
	fn fmt( &self, f: &mut std::fmt::Formatter ) -> std::fmt::Result {
		match &self.version {
			None => write!( f, "{} ({})", self.id, self.module ),
			Some( version ) => write!( f, "{}:{} ({})", self.id, version, self.module ),
		}
	}
}

/// Warning attached when a strategy matched despite a version mismatch.
///
/// Bundled plugins are versioned with the engine itself; a request pinning a
/// different version still resolves to the bundled implementation, with this
/// warning attached instead of a failure.
#[derive( Clone, Debug, Eq, PartialEq )]
pub struct CompatibilityWarning {
	id: PluginId,
	requested: String,
}

impl CompatibilityWarning {

	pub(crate) fn version_ignored( id: PluginId, requested: impl Into<String> ) -> Self {
		Self { id, requested: requested.into() }
	}

	/// Returns the id of the plugin the warning concerns.
	#[inline] pub fn id( &self ) -> &PluginId { &self.id }
	/// Returns the version the caller asked for.
	#[inline] pub fn requested_version( &self ) -> &str { &self.requested }

}

impl std::fmt::Display for CompatibilityWarning {
	fn fmt( &self, f: &mut std::fmt::Formatter ) -> std::fmt::Result {
		write!(
			f,
			"plugin '{}' is bundled with the engine; requested version '{}' was ignored",
			self.id, self.requested,
		)
	}
}

/// A successful resolution: the descriptor to load, plus any warning the
/// matching strategy attached.
#[derive( Clone, Debug, Eq, PartialEq )]
pub struct PluginResolution {
	descriptor: ModuleDescriptor,
	warning: Option<CompatibilityWarning>,
}

impl PluginResolution {

	/// Creates a clean resolution with no warning.
	pub fn of( descriptor: ModuleDescriptor ) -> Self {
		Self { descriptor, warning: None }
	}

	/// Attaches a compatibility warning to this resolution.
	pub fn with_warning( mut self, warning: CompatibilityWarning ) -> Self {
		self.warning = Some( warning );
		self
	}

	/// Returns the resolved descriptor.
	#[inline] pub fn descriptor( &self ) -> &ModuleDescriptor { &self.descriptor }
	/// Returns the warning attached by the matching strategy, if any.
	#[inline] pub fn warning( &self ) -> Option<&CompatibilityWarning> { self.warning.as_ref() }
	/// Consumes the resolution, returning the descriptor.
	#[inline] pub fn into_descriptor( self ) -> ModuleDescriptor { self.descriptor }

}
