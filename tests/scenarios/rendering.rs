//! Rendering scenario tests
//!
//! The same rolls on hosts with different display capabilities

use crate::harness::TestHost;
use logidice::DisplayCapabilities;

fn host(faces: impl IntoIterator<Item = u32>, multiline: bool, collapsible: bool) -> TestHost {
    TestHost::with_capabilities(
        faces,
        DisplayCapabilities {
            multiline,
            collapsible,
        },
    )
}

/// Test: Multi-line reply for a simple roll
#[tokio::test]
async fn test_multi_line() {
    let reply = host([8, 2, 3], true, false)
        .roll("roll", "1d20+2d4")
        .await
        .unwrap();
    assert_eq!(
        reply,
        "You rolled 1d20+2d4\n\n1d20: 8 = 8\n2d4: 2 3 = 5\nTotal: *13*"
    );
}

/// Test: Multi-line reply gives each repetition a header
#[tokio::test]
async fn test_multi_line_repetition() {
    let reply = host([8, 2, 6, 3], true, false)
        .roll("roll", "2x1d20+1d4")
        .await
        .unwrap();
    assert_eq!(
        reply,
        "You rolled 2x1d20+1d4\n\n*1d20+1d4*:\n- 1d20: 8 = 8\n- 1d4: 2 = 2\n\n*1d20+1d4*:\n- 1d20: 6 = 6\n- 1d4: 3 = 3\n\nTotal: *19*"
    );
}

/// Test: Collapsible reply puts the total in the summary
#[tokio::test]
async fn test_collapsible() {
    let reply = host([8], true, true).roll("roll", "1d20").await.unwrap();
    assert_eq!(
        reply,
        "You rolled 1d20: 8 : *Your rolls*: \n1d20: 8 = 8\nTotal: *8*"
    );
}

/// Test: Collapsible without multi-line support stays on one line
#[tokio::test]
async fn test_collapsible_needs_multi_line() {
    let reply = host([8], false, true).roll("roll", "1d20").await.unwrap();
    assert_eq!(reply, "You rolled: 1d20 || 1d20: 8 = 8 || Total: *8*");
}

/// Test: Successes stay highlighted in every layout
#[tokio::test]
async fn test_highlight_in_multi_line() {
    let reply = host([10, 4, 1], true, false)
        .roll("rollww", "2d10")
        .await
        .unwrap();
    assert_eq!(reply, "You rolled 2d10\n\n2d10: *10* 4 1 = 1\nTotal: *1*");
}
