//! Deployment-order roles over weighted stat scores

use triad_catalog::Creature;

use crate::report::{DeploymentPlan, Role, RoleAssignment};

struct Scored<'a> {
    member: &'a Creature,
    index: usize,
    pioneer: f64,
    core: f64,
    anchor: f64,
}

/// Assign the pioneer/core/anchor roles.
///
/// Each role is a weighted linear score over (speed, attack,
/// hp + defense + special defense). Pioneer and anchor are independent
/// argmaxes with first-index-wins ties; core is the first member holding
/// neither index. When pioneer and anchor land on the same member, core
/// falls back to the first slot, a degenerate case that can assign one
/// member two roles and leave another unassigned. A warning is logged
/// when that happens.
pub fn plan(members: &[&Creature]) -> DeploymentPlan {
    if members.is_empty() {
        return DeploymentPlan { order: Vec::new() };
    }

    let scored: Vec<Scored> = members
        .iter()
        .enumerate()
        .map(|(index, m)| {
            let speed = m.stats.speed as f64;
            let attack = m.stats.attack as f64;
            let staying = m.stats.bulk() as f64;
            Scored {
                member: m,
                index,
                pioneer: speed * 0.4 + attack * 0.4 + staying * 0.2,
                core: speed * 0.3 + attack * 0.3 + staying * 0.4,
                anchor: speed * 0.2 + attack * 0.2 + staying * 0.6,
            }
        })
        .collect();

    let mut pioneer = &scored[0];
    for s in &scored[1..] {
        if s.pioneer > pioneer.pioneer {
            pioneer = s;
        }
    }
    let mut anchor = &scored[0];
    for s in &scored[1..] {
        if s.anchor > anchor.anchor {
            anchor = s;
        }
    }

    if pioneer.index == anchor.index {
        tracing::warn!(
            member = %pioneer.member.name,
            "pioneer and anchor resolved to the same roster member"
        );
    }

    let core = scored
        .iter()
        .find(|s| s.index != pioneer.index && s.index != anchor.index)
        .unwrap_or(&scored[0]);

    DeploymentPlan {
        order: vec![
            assignment(Role::Pioneer, pioneer),
            assignment(Role::Core, core),
            assignment(Role::Anchor, anchor),
        ],
    }
}

fn assignment(role: Role, scored: &Scored) -> RoleAssignment {
    let stats = &scored.member.stats;
    let name = scored.member.display_name();
    let explanation = match role {
        Role::Pioneer => format!(
            "{} leads - speed {}, attack {}, built to strike first",
            name, stats.speed, stats.attack
        ),
        Role::Core => format!("{} holds the middle - a balanced pick for shifting situations", name),
        Role::Anchor => format!(
            "{} anchors the back line - staying power {}, built to close out",
            name,
            stats.bulk()
        ),
    };

    RoleAssignment {
        role,
        name: name.to_string(),
        speed: stats.speed,
        attack: stats.attack,
        staying_power: stats.bulk(),
        explanation,
    }
}
