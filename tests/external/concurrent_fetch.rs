use std::sync::{ Arc, Barrier };
use std::sync::atomic::Ordering ;
use std::time::Duration ;

use plugin_resolve::{ ExternalResolver, MemoryDescriptorCache, PluginRequest, PluginResolver };

use crate::backend::{ CountingBackend, Served };
use crate::recording::versioned ;

#[test]
fn concurrent_requests_for_the_same_key_share_one_fetch() {

	let descriptor = versioned( "org.example.docker", "repo.DockerPlugin", "1.2" );
	let ( backend, fetches ) = CountingBackend::new( Served::Artifact( descriptor ));
	let backend = backend.with_delay( Duration::from_millis( 50 ));

	let resolver = Arc::new( ExternalResolver::new( backend, MemoryDescriptorCache::new() ));
	let barrier = Arc::new( Barrier::new( 2 ));

	let handles: Vec<_> = ( 0..2 ).map(| _ | {
		let resolver = Arc::clone( &resolver );
		let barrier = Arc::clone( &barrier );
		std::thread::spawn( move || {
			let request = PluginRequest::with_version( "org.example.docker", "1.2" ).unwrap();
			barrier.wait();
			resolver.resolve( &request ).is_found()
		})
	}).collect();

	for handle in handles {
		assert!( handle.join().expect( "resolver thread panicked" ));
	}

	// The late arrival waits behind the in-flight fetch, then finds the
	// freshly cached descriptor on its re-check.
	assert_eq!( fetches.load( Ordering::SeqCst ), 1 );

}
