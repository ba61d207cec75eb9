//! Loan and fine workflows
//!
//! The `CirculationManager` owns the `loans` and `fines` collections and
//! drives every cross-entity side effect as explicit sequential store
//! calls: a loan decrements its book's inventory, a fine increments its
//! member's pending counter. The dependency direction is one-way — loans
//! and fines touch books and members, never the reverse.
//!
//! A checkout or return touches two collections, persisted as two
//! independent writes with no cross-file transaction; an interruption
//! between them can leave the collections inconsistent. Accepted risk for
//! the single-user deployment this targets.

use crate::error::{CirculationError, Result};
use biblio_config::CirculationConfig;
use biblio_core::{
    round_to_cents, Book, BookId, Date, Fine, FineId, Loan, LoanId, Member, MemberId,
};
use biblio_store::{find_by_id, find_by_id_mut, Record, Store};
use log::info;

/// Result of a processed return
///
/// Carries everything the caller needs to report the outcome without
/// re-reading collections.
#[derive(Debug, Clone)]
pub struct ReturnOutcome {
    /// The loan in its returned state
    pub loan: Loan,
    /// Whole days past the due date (zero when on time)
    pub days_late: i64,
    /// The fine spawned by a late return, if any
    pub fine: Option<Fine>,
}

/// High-level circulation management over a record store
pub struct CirculationManager {
    store: Store,
    config: CirculationConfig,
}

impl CirculationManager {
    /// Creates a manager over the given store with the given policy
    pub fn new(store: Store, config: CirculationConfig) -> Self {
        Self { store, config }
    }

    /// Returns the underlying store for read access by callers
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Returns the active policy
    pub fn config(&self) -> &CirculationConfig {
        &self.config
    }

    /// Checks out a book to a member, dated today
    pub fn create_loan(&self, member_id: MemberId, book_id: BookId) -> Result<Loan> {
        self.create_loan_at(member_id, book_id, Date::today())
    }

    /// Checks out a book to a member on the given date
    ///
    /// Eligibility gate: the member must exist, be active, and have no
    /// pending fines; the book must exist, be active, and have a copy
    /// available. The book inventory is decremented and saved before the
    /// loan record is persisted, so an interruption in between can leave a
    /// decrement without a matching loan.
    pub fn create_loan_at(&self, member_id: MemberId, book_id: BookId, on: Date) -> Result<Loan> {
        let members: Vec<Member> = self.store.load();
        let member = find_by_id(&members, member_id.get())
            .ok_or(CirculationError::MemberNotFound { id: member_id })?;
        if !member.active {
            return Err(CirculationError::MemberInactive { id: member_id });
        }
        if member.pending_fines_count > 0 {
            return Err(CirculationError::OutstandingFines {
                id: member_id,
                count: member.pending_fines_count,
            });
        }

        let mut books: Vec<Book> = self.store.load();
        let book = find_by_id_mut(&mut books, book_id.get())
            .ok_or(CirculationError::BookNotFound { id: book_id })?;
        if !book.active {
            return Err(CirculationError::BookInactive { id: book_id });
        }
        if !book.take_copy() {
            return Err(CirculationError::NoCopiesAvailable { id: book_id });
        }
        self.store.save(&books)?;

        let id = LoanId::new(self.store.next_id(Loan::COLLECTION)?);
        let loan = Loan::new(id, member_id, book_id, on, self.config.loan_period_days);
        let mut loans: Vec<Loan> = self.store.load();
        loans.push(loan.clone());
        self.store.save(&loans)?;

        info!(
            "Loan {} created: member {} borrowed book {}, due {}",
            loan.id, member_id, book_id, loan.expected_return_date
        );
        Ok(loan)
    }

    /// Processes a book return, dated today
    pub fn return_loan(&self, loan_id: LoanId) -> Result<ReturnOutcome> {
        self.return_loan_at(loan_id, Date::today())
    }

    /// Processes a book return on the given date
    ///
    /// A late return spawns a fine of `days_late * daily_fine_rate`
    /// against the loan's member. The book's copy is restored to inventory
    /// if its record still exists; a hard-removed book just skips that
    /// step. A loan can be returned exactly once.
    pub fn return_loan_at(&self, loan_id: LoanId, on: Date) -> Result<ReturnOutcome> {
        let mut loans: Vec<Loan> = self.store.load();
        let loan = find_by_id_mut(&mut loans, loan_id.get())
            .ok_or(CirculationError::LoanNotFound { id: loan_id })?;
        if !loan.is_active() {
            return Err(CirculationError::LoanAlreadyReturned { id: loan_id });
        }

        loan.mark_returned(on);
        let days_late = loan.days_late(on);

        let fine = if days_late > 0 {
            let amount = round_to_cents(days_late as f64 * self.config.daily_fine_rate);
            let reason = format!("{} day(s) late on loan #{}", days_late, loan_id);
            let fine = self.record_fine(loan.member_id, amount, reason, on)?;
            loan.fine_generated = true;
            Some(fine)
        } else {
            None
        };

        let returned = loan.clone();

        let mut books: Vec<Book> = self.store.load();
        if let Some(book) = find_by_id_mut(&mut books, returned.book_id.get()) {
            book.restore_copy();
            self.store.save(&books)?;
        }

        self.store.save(&loans)?;

        info!(
            "Loan {} returned on {} ({} day(s) late)",
            loan_id, on, days_late
        );
        Ok(ReturnOutcome {
            loan: returned,
            days_late,
            fine,
        })
    }

    /// Records payment of a fine, dated today
    pub fn pay_fine(&self, fine_id: FineId) -> Result<Fine> {
        self.pay_fine_at(fine_id, Date::today())
    }

    /// Records payment of a fine on the given date
    ///
    /// The member's pending counter is decremented, floored at zero. A fine
    /// can be paid exactly once.
    pub fn pay_fine_at(&self, fine_id: FineId, on: Date) -> Result<Fine> {
        let mut fines: Vec<Fine> = self.store.load();
        let fine = find_by_id_mut(&mut fines, fine_id.get())
            .ok_or(CirculationError::FineNotFound { id: fine_id })?;
        if !fine.is_pending() {
            return Err(CirculationError::FineAlreadyPaid { id: fine_id });
        }

        fine.mark_paid(on);
        let paid = fine.clone();
        self.store.save(&fines)?;

        let mut members: Vec<Member> = self.store.load();
        if let Some(member) = find_by_id_mut(&mut members, paid.member_id.get()) {
            member.settle_pending_fine();
            self.store.save(&members)?;
        }

        info!("Fine {} paid on {} ({:.2})", fine_id, on, paid.amount);
        Ok(paid)
    }

    /// Issues a fine manually, dated today
    pub fn create_fine(&self, member_id: MemberId, amount: f64, reason: &str) -> Result<Fine> {
        self.create_fine_at(member_id, amount, reason, Date::today())
    }

    /// Issues a fine manually on the given date
    ///
    /// The member must exist; the check runs before any id is reserved or
    /// file touched, so a failed lookup leaves no trace. The amount must be
    /// positive and is rounded to cents.
    pub fn create_fine_at(
        &self,
        member_id: MemberId,
        amount: f64,
        reason: &str,
        on: Date,
    ) -> Result<Fine> {
        let members: Vec<Member> = self.store.load();
        if find_by_id(&members, member_id.get()).is_none() {
            return Err(CirculationError::MemberNotFound { id: member_id });
        }
        if amount <= 0.0 {
            return Err(CirculationError::InvalidFineAmount { amount });
        }

        self.record_fine(member_id, round_to_cents(amount), reason.to_string(), on)
    }

    /// Appends a fine and bumps the member's pending counter
    ///
    /// Trusted internal path: callers have already verified the member (or
    /// hold the member id from an existing loan). Every appended fine gets
    /// a matching counter increment when both writes succeed; there is no
    /// rollback if the second write fails.
    fn record_fine(
        &self,
        member_id: MemberId,
        amount: f64,
        reason: String,
        on: Date,
    ) -> Result<Fine> {
        let id = FineId::new(self.store.next_id(Fine::COLLECTION)?);
        let fine = Fine::new(id, member_id, amount, reason, on);

        let mut fines: Vec<Fine> = self.store.load();
        fines.push(fine.clone());
        self.store.save(&fines)?;

        let mut members: Vec<Member> = self.store.load();
        if let Some(member) = find_by_id_mut(&mut members, member_id.get()) {
            member.record_pending_fine();
            self.store.save(&members)?;
        }

        info!(
            "Fine {} issued to member {}: {:.2} ({})",
            fine.id, member_id, fine.amount, fine.reason
        );
        Ok(fine)
    }

    /// Lists all loans
    pub fn loans(&self) -> Vec<Loan> {
        self.store.load()
    }

    /// Lists loans still out
    pub fn active_loans(&self) -> Vec<Loan> {
        self.loans().into_iter().filter(|l| l.is_active()).collect()
    }

    /// Looks up one loan by id
    pub fn loan(&self, id: LoanId) -> Option<Loan> {
        let loans = self.loans();
        find_by_id(&loans, id.get()).cloned()
    }

    /// Lists all fines
    pub fn fines(&self) -> Vec<Fine> {
        self.store.load()
    }

    /// Lists unpaid fines
    pub fn pending_fines(&self) -> Vec<Fine> {
        self.fines().into_iter().filter(|f| f.is_pending()).collect()
    }

    /// Looks up one fine by id
    pub fn fine(&self, id: FineId) -> Option<Fine> {
        let fines = self.fines();
        find_by_id(&fines, id.get()).cloned()
    }

    /// Sum of all unpaid fine amounts, rounded to cents
    pub fn pending_fines_total(&self) -> f64 {
        round_to_cents(self.pending_fines().iter().map(|f| f.amount).sum())
    }
}
