use replisome_sim::base::{OrganismProfile, UniformSource};
use replisome_sim::event::EventType;
use replisome_sim::replication::{ForkCoordinator, RuntimeState, Statistics};
use replisome_sim::simulation::ReplicationConfig;

pub fn print_organism(profile: &OrganismProfile) {
    println!("\n  • {} ({})", profile.name(), profile.class());
    println!("    - Polymerase Speed: {} nt/s", profile.polymerase_speed());
    println!("    - Okazaki Fragment Size: {} bp", profile.fragment_size());
    println!("    - Primer Length: {} nt", profile.primer_length());
}

pub fn print_run_header<U: UniformSource>(
    config: &ReplicationConfig,
    coordinator: &ForkCoordinator<U>,
    template: &str,
) {
    println!("📋 Replication Configuration");
    print_organism(coordinator.organism());
    println!("\n  • Template: {template}");
    println!("  • Length: {} bp", coordinator.total_length());
    println!("  • Step Size: {} bp [--step-size]", coordinator.step_size());
    println!("  • Max Steps: {} [--max-steps]", coordinator.max_steps());
    if let Some(seed) = config.seed {
        println!("  • Random Seed: {seed} [--seed]");
    } else {
        println!("  • Random Seed: Random [--seed]");
    }
    println!();
}

pub fn print_summary(state: &RuntimeState, stats: &Statistics) {
    println!("✓ Replication complete!");

    println!("\n🍴 Fork");
    println!(
        "  • Position: {}/{} bp ({:.1}%)",
        state.fork_position, state.total_length, state.completion_percentage
    );
    println!("  • Steps: {}", stats.actual_steps);

    println!("\n🧵 Strands");
    println!("  • Leading Strand: {} bp", state.leading_strand_progress);
    println!("  • Lagging Strand: {} bp", state.lagging_strand_length);
    println!(
        "  • Okazaki Fragments: {} completed, {} in progress",
        stats.lagging.completed_fragments, stats.lagging.active_fragments
    );

    println!("\n📊 Events ({} total)", stats.total_events);
    for kind in EventType::ALL {
        println!("  • {kind}: {}", stats.event_counts.get(kind));
    }
    println!();
}
