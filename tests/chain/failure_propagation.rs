use std::sync::atomic::Ordering ;

use plugin_resolve::{
	BackendError, CompositeResolver, PluginRequest, PluginResolver, ResolveError,
	ResolverChainBuilder, ResolverOutcome,
};

use crate::recording::{ bundled, RecordingResolver, Script };

#[test]
fn failure_aborts_the_chain_and_is_never_masked() {

	let ( miss, miss_count ) = RecordingResolver::new( "miss", Script::NotFound );
	let ( broken, broken_count ) = RecordingResolver::new( "broken", Script::TransportFailure );
	let ( unreached, unreached_count ) = RecordingResolver::new( "unreached", Script::Found( bundled( "java", "repo.JavaPlugin" )));

	let composite = CompositeResolver::new(
		ResolverChainBuilder::first( miss )
			.then( broken )
			.then( unreached )
			.freeze()
	);

	match composite.resolve( &PluginRequest::new( "java" ).unwrap() ) {
		ResolverOutcome::Failed( ResolveError::Backend { id, source: BackendError::Transport( _ )}) => {
			assert_eq!( id.as_str(), "java" );
		}
		value => panic!( "Expected Failed( Backend ), found: {:#?}", value ),
	}

	assert_eq!( miss_count.load( Ordering::SeqCst ), 1 );
	assert_eq!( broken_count.load( Ordering::SeqCst ), 1 );
	// A hard failure must not be papered over by a later coincidental match.
	assert_eq!( unreached_count.load( Ordering::SeqCst ), 0 );

}

#[test]
fn failure_carries_the_offending_request_id() {

	let ( broken, _ ) = RecordingResolver::new( "broken", Script::TransportFailure );
	let composite = CompositeResolver::new( ResolverChainBuilder::first( broken ).freeze() );

	let outcome = composite.resolve( &PluginRequest::new( "org.example.docker" ).unwrap() );
	match outcome.into_result() {
		Err( error ) => assert!( error.to_string().contains( "org.example.docker" )),
		value => panic!( "Expected an error, found: {:#?}", value ),
	}

}
