//! Plugin request types.
//!
//! A [`PluginRequest`] is the caller's ask: a validated [`PluginId`] plus an
//! optional version. Validation happens at construction; a request that reaches
//! a resolver is always well-formed.

use thiserror::Error ;



/// Raised when a request fails id/version validation.
///
/// Always surfaced to the caller before any resolver runs; never retried.
#[derive( Error, Debug, Clone, PartialEq, Eq )]
pub enum MalformedRequest {
	/// The plugin id is empty.
	#[error( "plugin id must not be empty" )] EmptyId,
	/// The plugin id contains a character outside the id grammar.
	#[error( "plugin id '{id}' contains illegal character '{illegal}'" )] IllegalCharacter { id: String, illegal: char },
	/// The plugin id starts or ends with a separator dot.
	#[error( "plugin id '{0}' must not start or end with '.'" )] LeadingOrTrailingDot( String ),
	/// The requested version is empty or contains whitespace.
	#[error( "plugin version '{0}' must be non-empty and contain no whitespace" )] InvalidVersion( String ),
}

/// Validated plugin identifier.
///
/// Grammar: non-empty; ASCII alphanumerics plus `.`, `-`, `_`; no leading or
/// trailing `.`. Path separators are rejected by construction, so an id can
/// never escape the identifier namespace.
#[derive( Clone, Debug, Eq, Hash, PartialEq, PartialOrd, Ord )]
pub struct PluginId( String );

impl PluginId {

	/// Creates a validated plugin id.
	///
	/// # Errors
	/// Returns [`MalformedRequest`] when the id is empty, contains a character
	/// outside the grammar, or starts/ends with `.`.
	pub fn new( id: impl Into<String> ) -> Result<Self, MalformedRequest> {
		let id = id.into();
		if id.is_empty() {
			return Err( MalformedRequest::EmptyId );
		}
		if let Some( illegal ) = id.chars().find(|&c | !( c.is_ascii_alphanumeric() || matches!( c, '.' | '-' | '_' ))) {
			return Err( MalformedRequest::IllegalCharacter { id, illegal });
		}
		if id.starts_with( '.' ) || id.ends_with( '.' ) {
			return Err( MalformedRequest::LeadingOrTrailingDot( id ));
		}
		Ok( Self( id ))
	}

	/// Returns the id as a string slice.
	#[inline] pub fn as_str( &self ) -> &str { &self.0 }

}

impl std::fmt::Display for PluginId {
	fn fmt( &self, f: &mut std::fmt::Formatter ) -> std::fmt::Result {
		std::fmt::Display::fmt( &self.0, f )
	}
}

impl AsRef<str> for PluginId {
	fn as_ref( &self ) -> &str { &self.0 }
}

/// An immutable request to resolve a plugin.
///
/// Equality and hashing are by `( id, version )`. An absent version means
/// "use the resolver's default/latest policy"; it is not the same request as
/// one pinned to an explicit version.
#[derive( Clone, Debug, Eq, Hash, PartialEq )]
pub struct PluginRequest {
	id: PluginId,
	version: Option<String>,
}

impl PluginRequest {

	/// Creates a request for the default/latest version of a plugin.
	///
	/// # Errors
	/// Returns [`MalformedRequest`] when the id fails validation.
	pub fn new( id: impl Into<String> ) -> Result<Self, MalformedRequest> {
		Ok( Self { id: PluginId::new( id )?, version: None })
	}

	/// Creates a request pinned to an explicit version.
	///
	/// # Errors
	/// Returns [`MalformedRequest`] when the id fails validation, or when the
	/// version is empty or contains whitespace.
	pub fn with_version( id: impl Into<String>, version: impl Into<String> ) -> Result<Self, MalformedRequest> {
		let version = version.into();
		if version.is_empty() || version.chars().any( char::is_whitespace ) {
			return Err( MalformedRequest::InvalidVersion( version ));
		}
		Ok( Self { id: PluginId::new( id )?, version: Some( version )})
	}

	/// Returns the requested plugin id.
	#[inline] pub fn id( &self ) -> &PluginId { &self.id }
	/// Returns the requested version, if the request pins one.
	#[inline] pub fn version( &self ) -> Option<&str> { self.version.as_deref() }

}

impl std::fmt::Display for PluginRequest {
	fn fmt( &self, f: &mut std::fmt::Formatter ) -> std::fmt::Result {
		match &self.version {
			None => write!( f, "{}", self.id ),
			Some( version ) => write!( f, "{}:{}", self.id, version ),
		}
	}
}
