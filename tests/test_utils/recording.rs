#[allow( dead_code )]
mod recording {

	use std::sync::Arc ;
	use std::sync::atomic::{ AtomicUsize, Ordering };

	use plugin_resolve::{
		BackendError, ModuleDescriptor, PluginId, PluginRequest, PluginResolution,
		PluginResolver, ResolveError, ResolverOutcome,
	};

	/// What a scripted strategy answers with on every invocation.
	pub enum Script {
		Found( ModuleDescriptor ),
		NotFound,
		TransportFailure,
	}

	/// Strategy instrumented to record how often it was invoked.
	pub struct RecordingResolver {
		name: &'static str,
		script: Script,
		invocations: Arc<AtomicUsize>,
	}

	impl RecordingResolver {
		pub fn new( name: &'static str, script: Script ) -> ( Self, Arc<AtomicUsize> ) {
			let invocations = Arc::new( AtomicUsize::new( 0 ));
			let resolver = Self { name, script, invocations: Arc::clone( &invocations )};
			( resolver, invocations )
		}
	}

	impl PluginResolver for RecordingResolver {

		fn resolve( &self, request: &PluginRequest ) -> ResolverOutcome {
			self.invocations.fetch_add( 1, Ordering::SeqCst );
			match &self.script {
				Script::Found( descriptor ) => ResolverOutcome::Found( PluginResolution::of( descriptor.clone() )),
				Script::NotFound => ResolverOutcome::NotFound,
				Script::TransportFailure => ResolverOutcome::Failed( ResolveError::Backend {
					id: request.id().clone(),
					source: BackendError::Transport( "connection refused".to_string() ),
				}),
			}
		}

		fn description( &self ) -> &str { self.name }

	}

	pub fn id( id: &str ) -> PluginId {
		PluginId::new( id ).expect( "test id should be valid" )
	}

	pub fn bundled( plugin: &str, module: &str ) -> ModuleDescriptor {
		ModuleDescriptor::bundled( id( plugin ), module )
	}

	pub fn versioned( plugin: &str, module: &str, version: &str ) -> ModuleDescriptor {
		ModuleDescriptor::versioned( id( plugin ), module, version )
	}

}
