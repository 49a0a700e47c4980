use plugin_resolve::{
	CorePluginResolver, MemoryPluginRegistry, PluginRequest, PluginResolver, ResolverOutcome,
};

use crate::recording::{ bundled, versioned };

#[test]
fn version_mismatch_attaches_a_compatibility_warning_instead_of_failing() {

	let registry: MemoryPluginRegistry = [ bundled( "java", "engine.plugins.JavaPlugin" )].into_iter().collect();
	let resolver = CorePluginResolver::new( registry );

	match resolver.resolve( &PluginRequest::with_version( "java", "7.0" ).unwrap() ) {
		ResolverOutcome::Found( resolution ) => {
			let warning = resolution.warning().expect( "a mismatched version should warn" );
			assert_eq!( warning.id().as_str(), "java" );
			assert_eq!( warning.requested_version(), "7.0" );
			assert!( warning.to_string().contains( "java" ));
		}
		value => panic!( "Expected Found with warning, found: {:#?}", value ),
	}

}

#[test]
fn matching_version_resolves_cleanly() {

	let registry: MemoryPluginRegistry = [ versioned( "scala", "engine.plugins.ScalaPlugin", "2.1" )].into_iter().collect();
	let resolver = CorePluginResolver::new( registry );

	match resolver.resolve( &PluginRequest::with_version( "scala", "2.1" ).unwrap() ) {
		ResolverOutcome::Found( resolution ) => assert!( resolution.warning().is_none() ),
		value => panic!( "Expected Found, found: {:#?}", value ),
	}

}

#[test]
fn unpinned_request_never_warns() {

	let registry: MemoryPluginRegistry = [ versioned( "scala", "engine.plugins.ScalaPlugin", "2.1" )].into_iter().collect();
	let resolver = CorePluginResolver::new( registry );

	match resolver.resolve( &PluginRequest::new( "scala" ).unwrap() ) {
		ResolverOutcome::Found( resolution ) => assert!( resolution.warning().is_none() ),
		value => panic!( "Expected Found, found: {:#?}", value ),
	}

}
