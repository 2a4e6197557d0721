//! Rolling scenario tests
//!
//! Notation handed to the dice commands with scripted faces

use crate::harness::TestHost;
use logidice::DiceError;

/// Test: One die, one line
#[tokio::test]
async fn test_single_die() {
    let host = TestHost::start([8]);
    let reply = host.roll("roll", "1d20").await.unwrap();
    assert_eq!(reply, "You rolled: 1d20 || 1d20: 8 = 8 || Total: *8*");
}

/// Test: Repetition rolls each copy separately and sums them
#[tokio::test]
async fn test_repetition() {
    let host = TestHost::start([8, 2, 6, 3]);
    let reply = host.roll("roll", "2x1d20+1d4").await.unwrap();
    assert_eq!(
        reply,
        "You rolled: 2x1d20+1d4 || «1d20: 8 = 8 | 1d4: 2 = 2» | «1d20: 6 = 6 | 1d4: 3 = 3» || Total: *19*"
    );
    assert_eq!(host.remaining(), 0);
}

/// Test: A dF term switches the whole roll to Fate scoring
#[tokio::test]
async fn test_fate_notation() {
    let host = TestHost::start([2]);
    let reply = host.roll("roll", "1dF").await.unwrap();
    assert_eq!(reply, "You rolled: 1dF || 1d6: [-] = -1 || Total: *-1*");

    let host = TestHost::start([1, 3, 5, 3]);
    let reply = host.roll("roll", "4dF").await.unwrap();
    assert_eq!(
        reply,
        "You rolled: 4dF || 4d6: [-] [ ] [+] [ ] = 0 || Total: *0*"
    );
}

/// Test: rollfate scores plain d6 terms as Fate dice
#[tokio::test]
async fn test_rollfate() {
    let host = TestHost::start([6, 6, 4, 1]);
    let reply = host.roll("rollfate", "4d6+1").await.unwrap();
    assert_eq!(
        reply,
        "You rolled: 4d6+1 || 4d6: [+] [+] [ ] [-] = 1 || Total: *2*"
    );
}

/// Test: White Wolf counts 8+ and rerolls tens
#[tokio::test]
async fn test_rollww() {
    let host = TestHost::start([9, 10, 9, 3]);
    let reply = host.roll("!rollww", "3d10").await.unwrap();
    assert_eq!(
        reply,
        "You rolled: 3d10 || 3d10: *9* *10* *9* 3 = 3 || Total: *3*"
    );
}

/// Test: Scion counts 7+ and tens twice
#[tokio::test]
async fn test_rollscion() {
    let host = TestHost::start([7, 10, 2]);
    let reply = host.roll("rollscion", "3d10").await.unwrap();
    assert_eq!(
        reply,
        "You rolled: 3d10 || 3d10: *7* *10* 2 = 3 || Total: *3*"
    );
}

/// Test: Dice totals feed the arithmetic and its functions
#[tokio::test]
async fn test_arithmetic() {
    let cases = [
        ("1d6+3", "Total: *6*"),
        ("ceil(1d6/2)", "Total: *2*"),
        ("floor(1d6/2)", "Total: *1*"),
        ("1d6/2", "Total: *1.5*"),
        ("(1d6+1)*2", "Total: *8*"),
    ];
    for (notation, expected) in cases {
        let host = TestHost::start([3]);
        let reply = host.roll("roll", notation).await.unwrap();
        assert!(reply.ends_with(expected), "{} gave {}", notation, reply);
    }
}

/// Test: Garbage rolls nothing and totals zero
#[tokio::test]
async fn test_nonsense() {
    let host = TestHost::start([5]);
    let reply = host.roll("roll", "@index&zwnj;d@index").await.unwrap();
    assert_eq!(reply, "You rolled: @index&zwnj;d@index ||  || Total: *0*");

    let reply = host.roll("roll", "elephant").await.unwrap();
    assert_eq!(reply, "You rolled: elephant ||  || Total: *0*");
    assert_eq!(host.remaining(), 1);
}

/// Test: No argument at all is an empty roll
#[tokio::test]
async fn test_no_argument() {
    let host = TestHost::start([5]);
    let reply = host.roll_bare("roll").await.unwrap();
    assert_eq!(reply, "You rolled:  ||  || Total: *0*");
}

/// Test: Oversized pools are clamped and shown clamped
#[tokio::test]
async fn test_clamped_pool() {
    let host = TestHost::start([1]);
    let reply = host.roll("roll", "500d1").await.unwrap();
    assert!(reply.contains("100d1: "), "{}", reply);
    assert!(reply.ends_with("Total: *100*"), "{}", reply);
}

/// Test: Broken arithmetic around dice is reported
#[tokio::test]
async fn test_arithmetic_error() {
    let host = TestHost::start([4]);
    let err = host.roll("roll", "1d6/0").await.unwrap_err();
    assert!(matches!(err, DiceError::Arithmetic(_)), "{:?}", err);
}

/// Test: Commands outside the set are rejected
#[tokio::test]
async fn test_unknown_command() {
    let host = TestHost::start([4]);
    let err = host.roll("rollyahtzee", "5d6").await.unwrap_err();
    assert!(matches!(err, DiceError::UnknownCommand(_)));
}
