use std::sync::Arc;
use std::thread;

use warden_permissions::{AuthorizationIndex, Grant, PermissionAware, PermissionsManager, Resource, Role};

const ROLES: [&str; 4] = ["viewer", "editor", "admin", "guest"];
const ACTIONS: [&str; 4] = ["create", "read", "update", "delete"];

fn compiled() -> PermissionsManager {
    let mut manager = PermissionsManager::new();
    manager
        .add_roles([
            Role::root("viewer").unwrap(),
            Role::new("editor", ["viewer"]).unwrap(),
            Role::new("admin", ["editor"]).unwrap(),
        ])
        .add_resources([Resource::crud("article"), Resource::crud("comment")])
        .add_grants([
            Grant::new("viewer", "article", ["read"]),
            Grant::new("viewer", "comment", ["read", "create"]),
            Grant::new("editor", "article", ["update"]),
            Grant::all("admin", "comment"),
        ]);
    manager.compile().unwrap();
    manager
}

fn answers(checker: &dyn PermissionAware) -> Vec<bool> {
    let mut out = Vec::new();
    for role in ROLES {
        for action in ACTIONS {
            for resource in ["article", "comment"] {
                out.push(checker.can(role, action, resource).unwrap());
            }
        }
    }
    out
}

#[test]
fn shared_index_answers_match_across_threads() {
    let manager = compiled();
    let expected = answers(&manager);
    let index: Arc<AuthorizationIndex> = manager.index().unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let index = Arc::clone(&index);
            thread::spawn(move || answers(&index))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn manager_can_be_borrowed_by_scoped_threads() {
    let manager = compiled();
    let expected = answers(&manager);

    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| assert_eq!(answers(&manager), expected));
        }
    });
}
