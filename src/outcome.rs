//! Resolution outcomes and the error taxonomy.
//!
//! Every strategy reports a [`ResolverOutcome`]: the tri-state lets the
//! composite distinguish "keep trying" ([`NotFound`]( ResolverOutcome::NotFound ))
//! from "stop and report" ([`Failed`]( ResolverOutcome::Failed )). `NotFound`
//! is a legitimate terminal result, not an error; only a `Failed` aborts the
//! chain.

use thiserror::Error ;

use crate::descriptor::PluginResolution ;
use crate::request::{ MalformedRequest, PluginId };



/// Failure surfaced by the dependency-resolution backend.
///
/// Propagated through the chain verbatim; retry policy, if any, belongs to
/// the backend, never to the chain.
#[derive( Error, Debug )]
pub enum BackendError {
	/// Network or transport failure while reaching a repository.
	#[error( "transport failure: {0}" )] Transport( String ),
	/// The fetched artifact did not decode to a valid plugin descriptor.
	#[error( "malformed plugin descriptor: {0}" )] MalformedDescriptor( String ),
	/// The fetched artifact failed checksum verification.
	#[error( "checksum mismatch for artifact '{0}'" )] ChecksumMismatch( String ),
	/// The backend's own timeout elapsed before the fetch completed.
	#[error( "backend fetch timed out" )] Timeout,
	/// The fetch was cancelled, e.g. by a build abort.
	#[error( "backend fetch cancelled" )] Cancelled,
}

/// A hard resolution failure that aborts the chain where it occurs.
#[derive( Error, Debug )]
pub enum ResolveError {
	/// The request failed id/version validation before any resolver ran.
	#[error( transparent )] MalformedRequest( #[from] MalformedRequest ),
	/// The requested plugin is already visible on the script's own loader.
	///
	/// A usage error: the caller declared a resolution for something that
	/// does not need resolving. Never retried or silently ignored.
	#[error( "plugin '{id}' is already on the script classpath and must not be resolved again" )] AlreadyOnClasspath { id: PluginId },
	/// A backend failure, carried through the chain unchanged.
	#[error( "failed to resolve plugin '{id}'" )] Backend { id: PluginId, #[source] source: BackendError },
	/// A strategy matched more than one candidate for a single id.
	#[error( "plugin '{id}' matched multiple candidates: {}", .candidates.join( ", " ))] AmbiguousMatch { id: PluginId, candidates: Vec<String> },
}

/// Result of one strategy's attempt at a request.
#[derive( Debug )]
pub enum ResolverOutcome {
	/// The strategy resolved the request; the chain stops here.
	Found( PluginResolution ),
	/// The strategy does not know the plugin; the chain keeps trying.
	NotFound,
	/// The strategy hit a hard failure; the chain aborts here.
	Failed( ResolveError ),
}

impl ResolverOutcome {

	/// Returns `true` for a [`Found`]( Self::Found ) outcome.
	#[inline] pub fn is_found( &self ) -> bool { matches!( self, Self::Found( _ ))}
	/// Returns `true` for a [`NotFound`]( Self::NotFound ) outcome.
	#[inline] pub fn is_not_found( &self ) -> bool { matches!( self, Self::NotFound )}
	/// Returns `true` for a [`Failed`]( Self::Failed ) outcome.
	#[inline] pub fn is_failed( &self ) -> bool { matches!( self, Self::Failed( _ ))}

	/// Collapses the tri-state for callers that treat `NotFound` as `None`.
	///
	/// # Errors
	/// Returns the inner [`ResolveError`] for a `Failed` outcome.
	pub fn into_result( self ) -> Result<Option<PluginResolution>, ResolveError> {
		match self {
			Self::Found( resolution ) => Ok( Some( resolution )),
			Self::NotFound => Ok( None ),
			Self::Failed( error ) => Err( error ),
		}
	}

}

impl From<PluginResolution> for ResolverOutcome {
	fn from( resolution: PluginResolution ) -> Self { Self::Found( resolution )}
}

impl From<ResolveError> for ResolverOutcome {
	fn from( error: ResolveError ) -> Self { Self::Failed( error )}
}
