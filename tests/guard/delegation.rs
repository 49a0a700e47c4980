use std::sync::atomic::Ordering ;

use plugin_resolve::{
	ClasspathGuardResolver, CompositeResolver, PluginRequest, PluginResolver,
	ResolverChainBuilder, ResolverOutcome, SnapshotDescriptorLocator,
};

use crate::recording::{ bundled, id, RecordingResolver, Script };

#[test]
fn absent_descriptor_delegates_and_returns_the_outcome_unchanged() {

	let ( core, core_count ) = RecordingResolver::new( "core", Script::Found( bundled( "java", "engine.plugins.JavaPlugin" )));
	let guard = ClasspathGuardResolver::new(
		SnapshotDescriptorLocator::new([ id( "groovy" )]),
		CompositeResolver::new( ResolverChainBuilder::first( core ).freeze() ),
	);

	match guard.resolve( &PluginRequest::new( "java" ).unwrap() ) {
		ResolverOutcome::Found( resolution ) => {
			assert_eq!( resolution.descriptor().module(), "engine.plugins.JavaPlugin" );
		}
		value => panic!( "Expected Found, found: {:#?}", value ),
	}
	assert_eq!( core_count.load( Ordering::SeqCst ), 1 );

}

#[test]
fn not_found_flows_through_the_guard_silently() {

	let ( core, _ ) = RecordingResolver::new( "core", Script::NotFound );
	let guard = ClasspathGuardResolver::new(
		SnapshotDescriptorLocator::default(),
		CompositeResolver::new( ResolverChainBuilder::first( core ).freeze() ),
	);

	assert!( guard.resolve( &PluginRequest::new( "unknown" ).unwrap() ).is_not_found() );

}

#[test]
fn guard_reports_the_wrapped_chain_in_diagnostics() {

	let ( core, _ ) = RecordingResolver::new( "the engine registry", Script::NotFound );
	let guard = ClasspathGuardResolver::new(
		SnapshotDescriptorLocator::default(),
		CompositeResolver::new( ResolverChainBuilder::first( core ).freeze() ),
	);

	assert_eq!( guard.description(), "the engine registry" );

}
