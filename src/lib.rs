//! A plugin resolution pipeline for build engines.
//!
//! A build script asks for a plugin by id (optionally pinned to a version);
//! this crate answers that [`PluginRequest`] by walking an ordered chain of
//! resolution strategies and returning the first match, while guarding
//! against re-resolving a plugin the script can already see on its own
//! loader.
//!
//! # Core Concepts
//!
//! - [`PluginRequest`]: A validated id plus optional version. Validation
//! 	happens at construction; a malformed id never reaches a resolver.
//!
//! - [`PluginResolver`]: The one contract everything implements -
//! 	`resolve( request ) -> ResolverOutcome`. Strategies, the composite chain,
//! 	and the guard are all polymorphic over it.
//!
//! - [`ResolverOutcome`]: A tri-state. `Found` stops the chain with a
//! 	[`PluginResolution`]; `NotFound` lets the chain keep trying (and is a
//! 	legitimate terminal result, not an error); `Failed` aborts the chain
//! 	where it happened and is never masked by a later strategy.
//!
//! - [`ResolverChain`]: A fixed-order, non-empty sequence of strategies,
//! 	frozen at assembly. Order encodes precedence: engine-bundled plugins
//! 	always win over externally fetched ones sharing an id.
//!
//! - [`ClasspathGuardResolver`]: Queries a [`DescriptorLocator`] bound to the
//! 	script's loader before any strategy runs; a plugin already visible there
//! 	fails fast with [`ResolveError::AlreadyOnClasspath`] instead of being
//! 	resolved twice through conflicting paths.
//!
//! - [`PluginResolverFactory`]: Wires the default chain
//! 	`[ NoopResolver, CorePluginResolver, ExternalResolver? ]` and wraps it
//! 	with the guard, producing one resolver per script-evaluation context.
//!
//! # Example
//!
//! ```
//! use plugin_resolve::{
//! 	ModuleDescriptor, MemoryPluginRegistry, PluginId, PluginRequest,
//! 	PluginResolver, PluginResolverFactory, ResolverOutcome,
//! 	SnapshotDescriptorLocator,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // The engine ships a "java" plugin.
//! let registry: MemoryPluginRegistry = [
//! 	ModuleDescriptor::bundled( PluginId::new( "java" )?, "engine.plugins.JavaPlugin" ),
//! ].into_iter().collect();
//!
//! let factory = PluginResolverFactory::new( registry );
//!
//! // Nothing plugin-like is visible on this script's loader yet.
//! let resolver = factory.create_resolver( SnapshotDescriptorLocator::default() );
//!
//! match resolver.resolve( &PluginRequest::new( "java" )? ) {
//! 	ResolverOutcome::Found( resolution ) => {
//! 		assert_eq!( resolution.descriptor().module(), "engine.plugins.JavaPlugin" );
//! 	}
//! 	outcome => panic!( "expected the bundled plugin, got {:?}", outcome ),
//! }
//!
//! // Unknown ids are a NotFound, not an error - the caller decides whether
//! // that is fatal for the build.
//! assert!( resolver.resolve( &PluginRequest::new( "unknown" )? ).is_not_found() );
//! # Ok(())
//! # }
//! ```
//!
//! # External Repositories
//!
//! The external strategy is a configuration option, disabled by default.
//! Enabling it takes a [`DependencyResolutionBackend`] (the opaque artifact
//! machinery) and a [`DescriptorCache`]; the cache is consulted before any
//! backend access and concurrent requests for the same `( id, version )`
//! share a single in-flight fetch.
//!
//! Backend failures ([`BackendError`]) propagate through the chain verbatim
//! and abort it - a transport error is never silently swallowed in favor of
//! a coincidental match later in the chain.

mod request ;
mod descriptor ;
mod outcome ;
mod resolver ;
mod noop ;
mod core_registry ;
mod external ;
mod chain ;
mod composite ;
mod guard ;
mod factory ;

pub use request::{ MalformedRequest, PluginId, PluginRequest };
pub use descriptor::{ CompatibilityWarning, ModuleDescriptor, PluginResolution };
pub use outcome::{ BackendError, ResolveError, ResolverOutcome };
pub use resolver::PluginResolver ;
pub use noop::NoopResolver ;
pub use core_registry::{ CorePluginResolver, MemoryPluginRegistry, PluginRegistry };
pub use external::{ CacheKey, DependencyResolutionBackend, DescriptorCache, ExternalResolver, MemoryDescriptorCache };
pub use chain::{ ResolverChain, ResolverChainBuilder };
pub use composite::CompositeResolver ;
pub use guard::{ ClasspathGuardResolver, DescriptorLocator, SnapshotDescriptorLocator };
pub use factory::PluginResolverFactory ;
