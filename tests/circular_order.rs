use rlc_sn::{SequenceNumber, HALF_MODULUS, MODULUS};

const WINDOW_SIZE: u16 = 256;

// Minimal transmit window: sequence numbers in [base, next_tx) are outstanding.
struct TxWindow {
    base: SequenceNumber,
    next_tx: SequenceNumber,
}

impl TxWindow {
    fn new(initial: u16) -> Self {
        Self {
            base: SequenceNumber::new(initial),
            next_tx: SequenceNumber::new(initial),
        }
    }

    fn rebase(&self, sn: SequenceNumber) -> SequenceNumber {
        sn.with_modulus_base(self.base)
    }

    fn outstanding(&self) -> u16 {
        // The raw difference is only congruent to the distance
        (self.next_tx - self.base) % MODULUS
    }

    fn can_send(&self) -> bool {
        self.outstanding() < WINDOW_SIZE
    }

    fn send(&mut self) -> SequenceNumber {
        assert!(self.can_send());
        self.next_tx.post_increment()
    }

    fn in_window(&self, sn: SequenceNumber) -> bool {
        let sn = self.rebase(sn);
        sn >= self.rebase(self.base) && sn < self.rebase(self.next_tx)
    }

    // Cumulative ack: everything before `ack_sn` has been received
    fn ack(&mut self, ack_sn: SequenceNumber) {
        let ack_sn = self.rebase(ack_sn);
        let mut base = self.rebase(self.base);

        assert!(ack_sn <= self.rebase(self.next_tx));

        while base < ack_sn {
            base += 1;
        }

        self.base = base;
    }
}

#[test]
fn window_across_wraparound() {
    let mut window = TxWindow::new(1000);

    let mut sent = Vec::new();
    while window.can_send() {
        sent.push(window.send());
    }

    assert_eq!(sent.len(), WINDOW_SIZE as usize);
    assert_eq!(sent[0].value(), 1000);
    assert_eq!(sent[24].value(), 0);
    assert_eq!(window.next_tx.value(), (1000 + WINDOW_SIZE) % MODULUS);

    for pair in sent.windows(2) {
        let a = window.rebase(pair[0]);
        let b = window.rebase(pair[1]);
        assert!(a < b, "{} should precede {}", a, b);
    }

    for &sn in sent.iter() {
        assert!(window.in_window(sn));
    }
    assert!(!window.in_window(window.next_tx));
    assert!(!window.in_window(window.base - 1));
}

#[test]
fn acks_advance_base() {
    let mut window = TxWindow::new(1020);

    for _ in 0 .. 10 {
        window.send();
    }
    assert_eq!(window.outstanding(), 10);

    window.ack(SequenceNumber::new(2));
    assert_eq!(window.base.value(), 2);
    assert_eq!(window.next_tx - window.base, 4);

    assert!(window.in_window(SequenceNumber::new(5)));
    assert!(!window.in_window(SequenceNumber::new(1023)));

    window.ack(SequenceNumber::new(6));
    assert_eq!(window.base.value(), window.next_tx.value());
    assert_eq!(window.outstanding(), 0);
}

#[test]
fn long_run_keeps_order() {
    let mut window = TxWindow::new(0);

    for _ in 0 .. 4 * MODULUS {
        let sn = window.send();
        let next = window.next_tx;

        assert!(window.rebase(sn) < window.rebase(next));
        assert_eq!((next - sn) % MODULUS, 1);

        if rand::random::<u32>() % 4 == 0 || !window.can_send() {
            window.ack(next);
        }
    }
}

#[test]
fn half_window_bound() {
    let base = SequenceNumber::new(300).with_modulus_base(300u16);

    let last_ahead = base + (HALF_MODULUS - 1);
    let first_behind = base - HALF_MODULUS;

    assert_eq!(last_ahead.modulus_base(), 300);
    assert!(last_ahead > base);
    assert!(first_behind < base);
}

#[test]
#[should_panic]
fn unrelated_windows_panic() {
    let a = TxWindow::new(10);
    let b = TxWindow::new(20);

    let _ = a.rebase(a.base) == b.rebase(b.base);
}
