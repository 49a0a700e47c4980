use std::sync::atomic::Ordering ;

use plugin_resolve::{ CompositeResolver, PluginRequest, PluginResolver, ResolverChainBuilder };

use crate::recording::{ RecordingResolver, Script };

#[test]
fn exhausted_chain_is_not_found_after_trying_every_strategy() {

	let ( first, first_count ) = RecordingResolver::new( "first", Script::NotFound );
	let ( second, second_count ) = RecordingResolver::new( "second", Script::NotFound );
	let ( third, third_count ) = RecordingResolver::new( "third", Script::NotFound );

	let composite = CompositeResolver::new(
		ResolverChainBuilder::first( first )
			.then( second )
			.then( third )
			.freeze()
	);

	assert!( composite.resolve( &PluginRequest::new( "unknown" ).unwrap() ).is_not_found() );
	assert_eq!( first_count.load( Ordering::SeqCst ), 1 );
	assert_eq!( second_count.load( Ordering::SeqCst ), 1 );
	assert_eq!( third_count.load( Ordering::SeqCst ), 1 );

}

#[test]
fn description_joins_the_strategies_in_precedence_order() {

	let ( first, _ ) = RecordingResolver::new( "the engine registry", Script::NotFound );
	let ( second, _ ) = RecordingResolver::new( "the plugin portal", Script::NotFound );

	let composite = CompositeResolver::new(
		ResolverChainBuilder::first( first ).then( second ).freeze()
	);

	assert_eq!( composite.description(), "the engine registry, then the plugin portal" );
	assert_eq!( composite.chain().len().get(), 2 );

}
